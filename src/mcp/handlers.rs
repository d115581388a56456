//! MCP protocol method handlers

use crate::core::catalog;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{
    ExtractCodeExamplesHandler, ListDocumentationHandler, SearchInDocsHandler, ToolRegistry,
};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// URI scheme under which catalog documents are published as resources
pub const RESOURCE_SCHEME: &str = "docs://";

const MARKDOWN_MIME: &str = "text/markdown";

pub fn resource_uri(name: &str) -> String {
    format!("{RESOURCE_SCHEME}{name}")
}

pub struct ProtocolHandlers {
    services: Arc<Services>,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        registry.register(Arc::new(ListDocumentationHandler::new()));
        registry.register(Arc::new(SearchInDocsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(ExtractCodeExamplesHandler::new(Arc::clone(
            &services,
        ))));

        Self {
            services,
            tool_registry: registry,
        }
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = parse_params_or_default(request.params)?;

        info!(
            client = params.client_info.as_ref().map(|c| c.name.as_str()),
            requested_version = params.protocol_version.as_deref(),
            "Client initialized"
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
                resources: ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                },
                completions: json!({}),
            },
            server_info: ServerInfo {
                name: "doclens".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(&self, _request: JsonRpcRequest) {
        info!("Client reported initialization complete");
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "tools": tools }),
        ))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: ToolCallParams = parse_params(request.params)?;

        let handler = self
            .tool_registry
            .get(&params.name)
            .ok_or_else(|| McpError::InvalidParams(format!("Tool not found: {}", params.name)))?;

        debug!(tool = %params.name, "Calling tool");
        let result = handler.execute(params.arguments).await?;

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle resources/list request
    ///
    /// Sizes come from metadata probes; a failed probe just omits the
    /// size.
    pub async fn handle_resources_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let source = self.services.source.as_ref();

        let resources = join_all(catalog::list().iter().map(|entry| async move {
            Resource {
                uri: resource_uri(entry.name),
                name: entry.name.to_string(),
                description: entry.description.to_string(),
                mime_type: MARKDOWN_MIME.to_string(),
                size: source.size(entry.name).await,
            }
        }))
        .await;

        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "resources": resources }),
        ))
    }

    /// Handle resources/templates/list request
    pub async fn handle_resource_templates_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let template = ResourceTemplate {
            uri_template: format!("{RESOURCE_SCHEME}{{name}}"),
            name: "documentation".to_string(),
            description: "A documentation file from the catalog".to_string(),
            mime_type: MARKDOWN_MIME.to_string(),
        };

        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "resourceTemplates": [template] }),
        ))
    }

    /// Handle resources/read request
    pub async fn handle_resources_read(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: ReadResourceParams = parse_params(request.params)?;

        let name = params
            .uri
            .strip_prefix(RESOURCE_SCHEME)
            .filter(|name| catalog::contains(name))
            .ok_or_else(|| McpError::ResourceNotFound(params.uri.clone()))?;

        let text = self.services.source.fetch(name).await?;

        let contents = ResourceContents {
            uri: params.uri.clone(),
            mime_type: MARKDOWN_MIME.to_string(),
            text,
        };

        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "contents": [contents] }),
        ))
    }

    /// Handle completion/complete request
    ///
    /// Only the `name` argument of the documentation resource template
    /// has completions; everything else completes to nothing.
    pub async fn handle_completion_complete(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: CompleteParams = parse_params(request.params)?;

        let values: Vec<String> = match &params.reference {
            CompletionReference::Resource { uri } if uri.starts_with(RESOURCE_SCHEME) => {
                if params.argument.name == "name" {
                    catalog::complete(Some(&params.argument.value))
                        .into_iter()
                        .map(str::to_string)
                        .collect()
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        };

        let completion = Completion {
            total: values.len(),
            values,
            has_more: false,
        };

        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "completion": completion }),
        ))
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, McpError> {
    let params = params.ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))?;
    serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))
}

fn parse_params_or_default<T: DeserializeOwned + Default>(
    params: Option<Value>,
) -> Result<T, McpError> {
    match params {
        None | Some(Value::Null) => Ok(T::default()),
        Some(params) => {
            serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))
        }
    }
}
