//! MCP protocol unit tests

#[cfg(test)]
mod tests {
    use doclens::mcp::protocol::*;
    use serde_json::json;

    #[test]
    fn test_parse_initialize_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": {
                    "name": "test",
                    "version": "1.0"
                }
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "initialize");
        assert_eq!(req.jsonrpc, "2.0");
        assert!(!req.is_notification());
        assert!(req.params.is_some());
    }

    #[test]
    fn test_parse_notification() {
        let json = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(req.is_notification());
        assert!(req.params.is_none());
    }

    #[test]
    fn test_serialize_initialize_response() {
        let response = InitializeResult {
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
                version: "0.2.0".to_string(),
            },
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(json["serverInfo"]["name"], "doclens");
        assert_eq!(json["capabilities"]["tools"]["listChanged"], false);
        assert_eq!(json["capabilities"]["resources"]["subscribe"], false);
    }

    #[test]
    fn test_json_rpc_response_with_result() {
        let response = JsonRpcResponse::success(Some(json!(1)), json!({"ok": true}));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], 1);
        assert_eq!(json["result"]["ok"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_json_rpc_response_with_error() {
        let response =
            JsonRpcResponse::error(None, METHOD_NOT_FOUND, "Unknown method: x".to_string());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], serde_json::Value::Null);
        assert_eq!(json["error"]["code"], -32601);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_tool_result_text() {
        let result = ToolResult::text("No code blocks found in 'sessions'");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "No code blocks found in 'sessions'");
        assert!(json.get("isError").is_none());
        assert!(json.get("structuredContent").is_none());
    }

    #[test]
    fn test_tool_result_error_flag() {
        let result = ToolResult::error("Filename is required");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isError"], true);
    }

    #[test]
    fn test_tool_result_structured_mirrors_text() {
        let result = ToolResult::structured(&json!({"total": 8})).unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["structuredContent"]["total"], 8);
        let text = json["content"][0]["text"].as_str().unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(reparsed["total"], 8);
    }

    #[test]
    fn test_parse_completion_params() {
        let params: CompleteParams = serde_json::from_value(json!({
            "ref": {"type": "ref/resource", "uri": "docs://{name}"},
            "argument": {"name": "name", "value": "to"}
        }))
        .unwrap();

        match params.reference {
            CompletionReference::Resource { uri } => assert_eq!(uri, "docs://{name}"),
            other => panic!("unexpected reference {other:?}"),
        }
        assert_eq!(params.argument.value, "to");
    }
}
