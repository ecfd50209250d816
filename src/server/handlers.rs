//! MCP tool handlers for the contact book.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Handlers only translate parameters and results; every decision is made by
//! [`ContactBook`].

use crate::error::{ContactError, PersistenceError};
use crate::models::Contact;
use crate::operations::SortField;
use crate::services::ContactBook;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The MCP server exposing contact book operations as tools.
#[derive(Clone)]
pub struct ContactBookMcpServer {
    book: Arc<RwLock<ContactBook>>,
    data_file: PathBuf,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-book".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Personal contact book - add, search, update, delete, sort, save and load contacts. Phone numbers are exactly 10 digits; separate several with commas and no spaces.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    name: String,
    /// Comma-separated 10-digit numbers, no spaces
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    address: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct TermParams {
    /// Name fragment (case-insensitive) or a complete phone number
    term: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactParams {
    /// Selects the first matching contact
    term: String,
    name: String,
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    address: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SortContactsParams {
    /// "name" or "phone"
    field: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FileParams {
    /// Defaults to the configured data file
    #[serde(default)]
    path: Option<String>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Caller mistakes (bad input, unknown contact) are reported as invalid params
fn contact_error(e: ContactError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn contact_json(contact: &Contact) -> serde_json::Value {
    serde_json::json!({
        "id": contact.id().to_string(),
        "Name": contact.name,
        "Phone": contact.phones,
        "Email": contact.email,
        "Address": contact.address,
    })
}

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(&value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl ContactBookMcpServer {
    /// Create a new contact book MCP server.
    ///
    /// `data_file` is used by save/load when the caller gives no path.
    pub fn new(book: ContactBook, data_file: PathBuf) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
            data_file,
            tool_router: Self::tool_router(),
        }
    }

    /// Shared handle to the served contact book.
    pub fn book(&self) -> Arc<RwLock<ContactBook>> {
        self.book.clone()
    }

    fn resolve_path(&self, path: Option<String>) -> PathBuf {
        path.map(PathBuf::from)
            .unwrap_or_else(|| self.data_file.clone())
    }

    /// List every contact in storage order.
    #[tool(description = "List every contact in storage order, with a one-line summary of all names")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let book = self.book.read().await;

        json_result(serde_json::json!({
            "summary": book.dashboard(),
            "count": book.len(),
            "contacts": book.list_all().iter().map(contact_json).collect::<Vec<_>>(),
        }))
    }

    /// Add a new contact.
    #[tool(
        description = "Add a new contact. Name must be non-empty; phone is one or more 10-digit numbers separated by commas without spaces."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: add_contact called");
        let contact = self
            .book
            .write()
            .await
            .add_contact(&params.name, &params.phone, &params.email, &params.address)
            .map_err(contact_error)?;

        json_result(contact_json(&contact))
    }

    /// Search contacts by name fragment or exact phone number.
    #[tool(
        description = "Search contacts. Matches names containing the term (case-insensitive) or phone numbers equal to the term (exact match only)."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<TermParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let results = self.book.read().await.search_contacts(&params.term);

        json_result(serde_json::json!({
            "term": params.term,
            "result_count": results.len(),
            "results": results.iter().map(contact_json).collect::<Vec<_>>(),
        }))
    }

    /// Replace the first contact matching a term.
    #[tool(
        description = "Replace the first contact matching the term with new details. The updated contact moves to the end of the list."
    )]
    async fn update_contact(
        &self,
        params: Parameters<UpdateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: update_contact called");
        tracing::debug!("Parameters: term={}, name={}", params.term, params.name);

        let contact = self
            .book
            .write()
            .await
            .update_contact(
                &params.term,
                &params.name,
                &params.phone,
                &params.email,
                &params.address,
            )
            .map_err(contact_error)?;

        json_result(contact_json(&contact))
    }

    /// Delete the first contact matching a term.
    #[tool(description = "Delete the first contact matching the term")]
    async fn delete_contact(
        &self,
        params: Parameters<TermParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: delete_contact called");
        let contact = self
            .book
            .write()
            .await
            .delete_contact(&params.term)
            .map_err(contact_error)?;

        json_result(serde_json::json!({ "deleted": contact_json(&contact) }))
    }

    /// Sort contacts by name or phone.
    #[tool(description = "Sort contacts in place by \"name\" or \"phone\" (stable, ascending)")]
    async fn sort_contacts(
        &self,
        params: Parameters<SortContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let field: SortField = params.0.field.parse().map_err(|e: String| McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e),
            data: None,
        })?;

        let mut book = self.book.write().await;
        book.sort_contacts(field);

        json_result(serde_json::json!({
            "sorted_by": field.to_string(),
            "summary": book.dashboard(),
        }))
    }

    /// Save all contacts to a JSON file.
    #[tool(description = "Save all contacts to a JSON file, overwriting it")]
    async fn save_contacts(
        &self,
        params: Parameters<FileParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = self.resolve_path(params.0.path);

        let book = self.book.read().await;
        book.save_to(&path).map_err(|e| {
            tracing::error!("Failed to save contacts: {:?}", e);
            to_mcp_error(e)
        })?;

        json_result(serde_json::json!({
            "path": path.display().to_string(),
            "saved": book.len(),
        }))
    }

    /// Load contacts from a JSON file, replacing the current list.
    #[tool(
        description = "Load contacts from a JSON file, replacing all current contacts. A missing file leaves the current contacts in place."
    )]
    async fn load_contacts(
        &self,
        params: Parameters<FileParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = self.resolve_path(params.0.path);

        let mut book = self.book.write().await;
        match book.load_from(&path) {
            Ok(count) => json_result(serde_json::json!({
                "path": path.display().to_string(),
                "loaded": count,
                "summary": book.dashboard(),
            })),
            Err(PersistenceError::FileNotFound(_)) => json_result(serde_json::json!({
                "path": path.display().to_string(),
                "loaded": 0,
                "message": "No saved contacts found.",
            })),
            Err(e) => {
                tracing::error!("Failed to load contacts: {:?}", e);
                Err(to_mcp_error(e))
            }
        }
    }
}
