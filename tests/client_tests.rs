use assert_json_diff::assert_json_eq;
use catalyst_client::client::ApiClient;
use catalyst_client::config::Config;
use catalyst_client::error::AppError;
use catalyst_client::model::requests::RequestConfig;
use catalyst_client::session::{InMemoryTokenStore, TokenStore};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn client_for(server: &ServerGuard, store: Arc<InMemoryTokenStore>) -> ApiClient {
    ApiClient::new(Config::with_base_url(server.url()), store).expect("client should build")
}

#[tokio::test]
async fn get_returns_the_full_response_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/demo/utils-demo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"id":1}}"#)
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let payload: Value = client.get("/demo/utils-demo", None).await.unwrap();

    assert_json_eq!(payload, json!({"data": {"id": 1}}));
    mock.assert_async().await;
}

#[tokio::test]
async fn bearer_header_carries_the_stored_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/demo/utils-demo")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::with_token("abc123"));
    let client = client_for(&server, store);
    let _: Value = client.get("/demo/utils-demo", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn no_authorization_header_without_a_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/demo/utils-demo")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let _: Value = client.get("/demo/utils-demo", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn content_type_is_stripped_from_get_and_delete() {
    let mut server = Server::new_async().await;
    let get_mock = server
        .mock("GET", "/items")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let delete_mock = server
        .mock("DELETE", "/items")
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let config = RequestConfig::new().header("Content-Type", "application/json");
    let _: Value = client.get("/items", Some(config.clone())).await.unwrap();
    let _: Value = client.delete("/items", Some(config)).await.unwrap();

    get_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn caller_supplied_content_type_survives_on_post() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/items")
        .match_header("content-type", "application/xml")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let config = RequestConfig::new().header("Content-Type", "application/xml");
    let _: Value = client
        .post("/items", &json!({"a": 1}), Some(config))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn query_parameters_are_forwarded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/demo/utils-demo")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let config = RequestConfig::new()
        .query("page", "2")
        .query("per_page", "10");
    let _: Value = client.get("/demo/utils-demo", Some(config)).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn trailing_slash_on_base_and_bare_endpoint_join_cleanly() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/demo")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let config = Config::with_base_url(format!("{}/", server.url()));
    let client =
        ApiClient::new(config, Arc::new(InMemoryTokenStore::new())).expect("client should build");
    let _: Value = client.get("demo", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn revoked_token_fires_handler_once_and_failure_still_surfaces() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/demo/utils-demo")
        .with_status(401)
        .with_body(r#"{"error": "Token has been revoked"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    client.set_session_expired_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let result: Result<Value, AppError> = client.get("/demo/utils-demo", None).await;
    let err = result.expect_err("the failure must surface to the caller");

    assert_eq!(fired.load(Ordering::SeqCst), 1);
    match err {
        AppError::Http { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body["error"], "Token has been revoked");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn expired_signature_also_fires_the_handler() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/demo/utils-demo")
        .with_status(401)
        .with_body(r#"{"error": "Signature has expired"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    client.set_session_expired_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let result: Result<Value, AppError> = client.get("/demo/utils-demo", None).await;
    assert!(result.is_err());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn other_errors_do_not_fire_the_handler() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/demo/utils-demo")
        .with_status(403)
        .with_body(r#"{"error": "some other error"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    client.set_session_expired_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let result: Result<Value, AppError> = client.get("/demo/utils-demo", None).await;
    let err = result.expect_err("the failure must surface to the caller");

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
}

#[tokio::test]
async fn later_handler_registration_replaces_the_earlier_one() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/demo/utils-demo")
        .with_status(401)
        .with_body(r#"{"error": "Token has been revoked"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&first);
    client.set_session_expired_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let counter = Arc::clone(&second);
    client.set_session_expired_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let _: Result<Value, AppError> = client.get("/demo/utils-demo", None).await;

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn panicking_handler_does_not_mask_the_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/demo/utils-demo")
        .with_status(401)
        .with_body(r#"{"error": "Token has been revoked"}"#)
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    client.set_session_expired_handler(|| panic!("handler blew up"));

    let result: Result<Value, AppError> = client.get("/demo/utils-demo", None).await;
    let err = result.expect_err("the original failure must still propagate");
    assert!(err.is_session_expired());
}

#[tokio::test]
async fn non_json_error_body_skips_detection_but_surfaces() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/demo/utils-demo")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let client = client_for(&server, Arc::new(InMemoryTokenStore::new()));
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    client.set_session_expired_handler(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let result: Result<Value, AppError> = client.get("/demo/utils-demo", None).await;
    match result.expect_err("failure must surface") {
        AppError::Http { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, Value::Null);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on port 1; the request fails before any response exists
    let config = Config::with_base_url("http://127.0.0.1:1");
    let client =
        ApiClient::new(config, Arc::new(InMemoryTokenStore::new())).expect("client should build");

    let result: Result<Value, AppError> = client.get("/demo", None).await;
    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn token_store_is_read_on_every_request() {
    let mut server = Server::new_async().await;
    let anonymous = server
        .mock("GET", "/first")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let authenticated = server
        .mock("GET", "/second")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let store = Arc::new(InMemoryTokenStore::new());
    let client = client_for(&server, Arc::clone(&store));

    let _: Value = client.get("/first", None).await.unwrap();
    store.set_token("fresh");
    let _: Value = client.get("/second", None).await.unwrap();

    anonymous.assert_async().await;
    authenticated.assert_async().await;
}
