//! MCP dispatch tests against a local documentation host

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, DocServer, TOOLS_MD};
    use doclens::mcp::protocol::*;
    use doclens::mcp::McpServer;
    use serde_json::{json, Value};

    async fn create_test_server() -> McpServer {
        McpServer::new(create_test_services(DocServer::with_samples()).await)
    }

    async fn call(server: &McpServer, method: &str, params: Value) -> JsonRpcResponse {
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        };
        server.dispatch(request).await.expect("requests get responses")
    }

    async fn call_tool(server: &McpServer, name: &str, arguments: Value) -> Value {
        let response = call(
            server,
            "tools/call",
            json!({"name": name, "arguments": arguments}),
        )
        .await;
        assert!(response.error.is_none(), "unexpected error: {:?}", response.error);
        response.result.unwrap()
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let server = create_test_server().await;
        let response = call(
            &server,
            "initialize",
            json!({
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "1.0"}
            }),
        )
        .await;

        assert_eq!(response.jsonrpc, "2.0");
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "doclens");
        assert!(result["capabilities"]["tools"].is_object());
        assert!(result["capabilities"]["resources"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_has_tools() {
        let server = create_test_server().await;
        let response = call(&server, "tools/list", json!({})).await;

        let tools = response.result.unwrap()["tools"].clone();
        let names: Vec<&str> = tools
            .as_array()
            .unwrap()
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["extract_code_examples", "list_documentation", "search_in_docs"]
        );

        for tool in tools.as_array().unwrap() {
            assert!(tool["inputSchema"].is_object());
            assert_eq!(tool["annotations"]["readOnlyHint"], true);
        }
    }

    #[tokio::test]
    async fn test_list_documentation() {
        let server = create_test_server().await;
        let result = call_tool(&server, "list_documentation", json!({})).await;

        assert_eq!(result["structuredContent"]["total"], 8);
        assert_eq!(result["structuredContent"]["files"][6]["name"], "tools");
    }

    #[tokio::test]
    async fn test_search_in_docs() {
        let server = create_test_server().await;
        let result = call_tool(&server, "search_in_docs", json!({"query": "MCP"})).await;

        let report = &result["structuredContent"];
        assert_eq!(report["totalFiles"], 1);
        assert_eq!(report["totalMatches"], 2);
        assert_eq!(report["results"][0]["file"], "introduction");
        assert_eq!(report["results"][0]["matches"][1]["lineNumber"], 10);
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let server = create_test_server().await;
        let result = call_tool(&server, "search_in_docs", json!({"query": "zebra"})).await;

        assert_eq!(
            result["content"][0]["text"],
            "No results found for query: \"zebra\""
        );
        assert!(result.get("isError").is_none());
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let server = create_test_server().await;
        let result = call_tool(&server, "search_in_docs", json!({})).await;

        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Search query is required");
    }

    #[tokio::test]
    async fn test_extract_code_examples() {
        let server = create_test_server().await;
        let result = call_tool(&server, "extract_code_examples", json!({"filename": "tools"})).await;

        assert_eq!(
            result["structuredContent"],
            json!({
                "filename": "tools",
                "totalBlocks": 1,
                "codeBlocks": [{"language": "ts", "code": "const x=1", "lineNumber": 5}]
            })
        );
    }

    #[tokio::test]
    async fn test_extract_requires_filename() {
        let server = create_test_server().await;
        let result = call_tool(&server, "extract_code_examples", json!({"filename": ""})).await;

        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Filename is required");
    }

    #[tokio::test]
    async fn test_extract_missing_document() {
        let server = create_test_server().await;
        let result =
            call_tool(&server, "extract_code_examples", json!({"filename": "prompts"})).await;

        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Failed to extract code examples: "));
        assert!(text.contains("prompts"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let server = create_test_server().await;
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(2)),
            method: "tools/call".to_string(),
            params: None,
        };

        let response = server.dispatch(request).await.unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let server = create_test_server().await;
        let response = call(&server, "tools/call", json!({"name": "read_file"})).await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("read_file"));
    }

    #[tokio::test]
    async fn test_resources_list() {
        let server = create_test_server().await;
        let response = call(&server, "resources/list", json!({})).await;

        let resources = response.result.unwrap()["resources"].clone();
        let tools = resources
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["uri"] == "docs://tools")
            .cloned()
            .unwrap();
        assert_eq!(tools["mimeType"], "text/markdown");
        assert_eq!(tools["size"], TOOLS_MD.len());
    }

    #[tokio::test]
    async fn test_resources_read() {
        let server = create_test_server().await;
        let response = call(&server, "resources/read", json!({"uri": "docs://tools"})).await;

        assert_eq!(response.result.unwrap()["contents"][0]["text"], TOOLS_MD);
    }

    #[tokio::test]
    async fn test_resources_read_missing_upstream() {
        let server = create_test_server().await;
        let response = call(&server, "resources/read", json!({"uri": "docs://prompts"})).await;

        assert_eq!(response.error.unwrap().code, RESOURCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resource_templates_list() {
        let server = create_test_server().await;
        let response = call(&server, "resources/templates/list", json!({})).await;

        let result = response.result.unwrap();
        assert_eq!(result["resourceTemplates"][0]["uriTemplate"], "docs://{name}");
    }

    #[tokio::test]
    async fn test_completion_complete() {
        let server = create_test_server().await;
        let response = call(
            &server,
            "completion/complete",
            json!({
                "ref": {"type": "ref/resource", "uri": "docs://{name}"},
                "argument": {"name": "name", "value": "  Un"}
            }),
        )
        .await;

        let completion = response.result.unwrap()["completion"].clone();
        assert_eq!(completion["values"], json!(["unit-tests"]));
    }

    #[tokio::test]
    async fn test_ping_handler() {
        let server = create_test_server().await;
        let response = call(&server, "ping", json!({})).await;
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = create_test_server().await;
        let response = call(&server, "prompts/list", json!({})).await;
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
    }
}
