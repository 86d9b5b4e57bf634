//! Tests for MCP protocol JSON-RPC handling.
//!
//! Drive the dispatcher directly and through the stdio line loop.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use elsevier_mcp::client::ElsevierClient;
use elsevier_mcp::config::Config;
use elsevier_mcp::server::McpServer;
use elsevier_mcp::server::protocol::{
    INVALID_PARAMS, JsonRpcRequest, METHOD_NOT_FOUND, McpHandler, PARSE_ERROR,
};
use elsevier_mcp::server::stdio::serve_lines;

fn server_for(base_url: &str, enable_all: bool) -> McpServer {
    let client = ElsevierClient::new(Config::for_testing(base_url)).unwrap();
    McpServer::new(client, enable_all)
}

fn request(value: Value) -> JsonRpcRequest {
    serde_json::from_value(value).unwrap()
}

async fn call(handler: &McpHandler, value: Value) -> Value {
    let response = handler.handle(&request(value)).await.unwrap();
    serde_json::to_value(response).unwrap()
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_initialize_echoes_protocol_version() {
    let server = server_for("http://127.0.0.1:1", false);
    let handler = server.handler();

    let response = call(
        &handler,
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
               "params": {"protocolVersion": "2025-03-26"}}),
    )
    .await;

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(response["result"]["serverInfo"]["name"], "elsevier-mcp");
    assert_eq!(response["result"]["capabilities"]["tools"]["listChanged"], false);
}

#[tokio::test]
async fn test_initialize_default_protocol_version() {
    let server = server_for("http://127.0.0.1:1", false);

    let response =
        call(&server.handler(), json!({"jsonrpc": "2.0", "id": "a", "method": "initialize"})).await;

    assert_eq!(response["id"], "a");
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let server = server_for("http://127.0.0.1:1", false);
    let handler = server.handler();

    for method in ["notifications/initialized", "initialized", "tools/list", "bogus"] {
        let req = request(json!({"jsonrpc": "2.0", "method": method}));
        assert!(handler.handle(&req).await.is_none(), "{method} should be silent");
    }
}

#[tokio::test]
async fn test_ping() {
    let server = server_for("http://127.0.0.1:1", false);

    let response = call(&server.handler(), json!({"jsonrpc": "2.0", "id": 7, "method": "ping"})).await;

    assert_eq!(response["result"], json!({}));
    assert!(response.get("error").is_none());
}

#[tokio::test]
async fn test_unknown_method() {
    let server = server_for("http://127.0.0.1:1", false);

    let response =
        call(&server.handler(), json!({"jsonrpc": "2.0", "id": 2, "method": "resources/list"})).await;

    assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    assert!(response.get("result").is_none());
}

// =============================================================================
// tools/list and tools/call
// =============================================================================

#[tokio::test]
async fn test_tools_list_default_and_full() {
    for (enable_all, expected) in [(false, 6), (true, 13)] {
        let server = server_for("http://127.0.0.1:1", enable_all);
        assert_eq!(server.list_tools().len(), expected);

        let response =
            call(&server.handler(), json!({"jsonrpc": "2.0", "id": 3, "method": "tools/list"})).await;
        let tools = response["result"]["tools"].as_array().unwrap();

        assert_eq!(tools.len(), expected);
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }
}

#[tokio::test]
async fn test_institutional_tools_hidden_by_default() {
    let server = server_for("http://127.0.0.1:1", false);

    assert!(server.get_tool("scopus_search").is_some());
    assert!(server.get_tool("plumx_metrics").is_none());

    let response = call(
        &server.handler(),
        json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call",
               "params": {"name": "plumx_metrics", "arguments": {"id_type": "doi", "id_value": "x"}}}),
    )
    .await;

    assert_eq!(response["error"]["code"], INVALID_PARAMS);
    assert_eq!(response["error"]["message"], "Tool not found: plumx_metrics");
}

#[tokio::test]
async fn test_tools_call_missing_name() {
    let server = server_for("http://127.0.0.1:1", false);

    let response = call(
        &server.handler(),
        json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call", "params": {}}),
    )
    .await;

    assert_eq!(response["error"]["code"], INVALID_PARAMS);
}

#[tokio::test]
async fn test_tools_call_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/subject/scopus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subject-classifications": {"subject-classification": []}})))
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server.uri(), false);
    let response = call(
        &server.handler(),
        json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call",
               "params": {"name": "subject_classifications", "arguments": {"source": "scopus"}}}),
    )
    .await;

    let content = &response["result"]["content"][0];
    assert_eq!(content["type"], "text");
    assert!(content["text"].as_str().unwrap().contains("subject-classifications"));
    assert!(response["result"].get("isError").is_none());
}

#[tokio::test]
async fn test_tools_call_api_failure_is_tool_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/serial/title/issn/0000-0000"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let server = server_for(&mock_server.uri(), false);
    let response = call(
        &server.handler(),
        json!({"jsonrpc": "2.0", "id": 8, "method": "tools/call",
               "params": {"name": "serial_title_retrieval", "arguments": {"issn": "0000-0000"}}}),
    )
    .await;

    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);
    assert_eq!(
        response["result"]["content"][0]["text"],
        "Elsevier API error (404): HTTP 404: Not Found"
    );
}

#[tokio::test]
async fn test_tools_call_validation_failure_is_tool_error() {
    let server = server_for("http://127.0.0.1:1", false);

    let response = call(
        &server.handler(),
        json!({"jsonrpc": "2.0", "id": 9, "method": "tools/call",
               "params": {"name": "scopus_search", "arguments": {"query": "x", "count": 0}}}),
    )
    .await;

    assert_eq!(response["result"]["isError"], true);
    assert_eq!(
        response["result"]["content"][0]["text"],
        "Invalid input for 'count': must be at least 1"
    );
}

// =============================================================================
// Stdio line loop
// =============================================================================

#[tokio::test]
async fn test_serve_lines_round_trip() {
    let server = server_for("http://127.0.0.1:1", true);
    let handler = server.handler();

    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n\n",
        "this is not json\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
    );
    let mut output = Vec::new();

    serve_lines(&handler, input.as_bytes(), &mut output).await.unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[1]["error"]["code"], PARSE_ERROR);
    assert_eq!(lines[1]["id"], Value::Null);
    assert_eq!(lines[2]["result"]["tools"].as_array().unwrap().len(), 13);
}
