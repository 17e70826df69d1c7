use searchbench_client::{Client, ClientConfig};
use searchbench_common::SearchBenchError;
use serde_json::json;

// Helper: build a Client aimed at the given mockito server URL (strips the http:// prefix).
fn client_for(server_url: &str) -> Client {
    let addr = server_url.trim_start_matches("http://").to_string();
    Client::new(ClientConfig { addr }).unwrap()
}

fn star_query() -> serde_json::Value {
    json!({ "query": { "query_string": { "query": "*" } }, "size": 10 })
}

#[test]
fn test_client_creation_with_config() {
    let client = Client::new(ClientConfig { addr: "example.com:9200".to_string() }).unwrap();
    assert_eq!(client.config.addr, "example.com:9200");
}

#[test]
fn test_build_search_url() {
    let client = Client::new(ClientConfig { addr: "127.0.0.1:9200".to_string() }).unwrap();
    assert_eq!(
        client.build_search_url("bench_index"),
        "http://127.0.0.1:9200/bench_index/_search"
    );
}

#[test]
fn test_search_decodes_hits() {
    let mut server = mockito::Server::new();
    let body = json!({
        "took": 3,
        "timed_out": false,
        "hits": {
            "total": 2,
            "hits": [
                { "_index": "bench_index", "_id": "1", "_source": { "title": "a" } },
                { "_index": "bench_index", "_id": "2", "_source": { "title": "b" } }
            ]
        }
    });
    let mock = server
        .mock("POST", "/bench_index/_search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create();

    let client = client_for(&server.url());
    let response = client.search("bench_index", &star_query()).unwrap();

    mock.assert();
    assert_eq!(response.took_ms, 3);
    assert!(!response.timed_out);
    let hits = response.hits.unwrap();
    assert_eq!(hits.total, 2);
    assert_eq!(hits.hits.len(), 2);
    assert_eq!(hits.hits[0].id, "1");
    assert_eq!(hits.hits[1].source["title"], "b");
}

#[test]
fn test_search_without_hits_object_is_ok_but_empty() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bench_index/_search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "took": 1, "timed_out": false }"#)
        .create();

    let client = client_for(&server.url());
    let response = client.search("bench_index", &star_query()).unwrap();

    assert!(response.hits.is_none());
}

#[test]
fn test_search_http_error_with_envelope() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bench_index/_search")
        .with_status(503)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "error": "shards unavailable" }"#)
        .create();

    let client = client_for(&server.url());
    let err = client.search("bench_index", &star_query()).unwrap_err();

    assert_eq!(err, SearchBenchError::HttpError(503, "shards unavailable".to_string()));
}

#[test]
fn test_search_http_error_without_envelope() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bench_index/_search")
        .with_status(500)
        .with_body("not json")
        .create();

    let client = client_for(&server.url());
    let err = client.search("bench_index", &star_query()).unwrap_err();

    match err {
        SearchBenchError::HttpError(500, msg) => {
            assert!(msg.contains("500"), "fallback message should carry the status: {msg}");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[test]
fn test_search_network_error() {
    // Bind to an ephemeral port, then release it: nothing listens there,
    // so the connection is refused deterministically.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = Client::new(ClientConfig { addr: format!("127.0.0.1:{port}") }).unwrap();
    let err = client.search("bench_index", &star_query()).unwrap_err();

    assert!(matches!(err, SearchBenchError::NetworkError(_)), "got {err:?}");
}
