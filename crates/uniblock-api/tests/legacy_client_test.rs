#![allow(clippy::unwrap_used)]
// Integration tests for `LegacyClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use uniblock_api::{ControllerPlatform, Error, LegacyClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, LegacyClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = LegacyClient::with_client(
        reqwest::Client::new(),
        base_url,
        "default".into(),
        ControllerPlatform::ClassicController,
    );
    (server, client)
}

fn site_path(suffix: &str) -> String {
    format!("/api/s/default/{suffix}")
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "meta": { "rc": "ok" }, "data": data })
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "username": "admin", "password": "test-password" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "test-password".to_string().into();
    client.login("admin", &secret).await.unwrap();
}

#[tokio::test]
async fn test_login_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("api.err.Invalid"))
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "wrong-password".to_string().into();
    let result = client.login("admin", &secret).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unifi_os_csrf_token_forwarded_on_commands() {
    let server = MockServer::start().await;
    let client = LegacyClient::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
        "default".into(),
        ControllerPlatform::UnifiOs,
    );

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-CSRF-Token", "csrf-123")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/proxy/network/api/s/default/cmd/stamgr"))
        .and(header("X-CSRF-Token", "csrf-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let secret: secrecy::SecretString = "pw".to_string().into();
    client.login("admin", &secret).await.unwrap();
    client.block_client("aa:bb:cc:dd:ee:ff").await.unwrap();
}

#[tokio::test]
async fn test_detect_platform_unifi_os() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let platform = LegacyClient::detect_platform(&base, &TransportConfig::default())
        .await
        .unwrap();
    assert_eq!(platform, ControllerPlatform::UnifiOs);
}

#[tokio::test]
async fn test_detect_platform_classic() {
    let server = MockServer::start().await;

    // Unmatched paths answer 404, which rules out UniFi OS.
    Mock::given(method("GET"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).unwrap();
    let platform = LegacyClient::detect_platform(&base, &TransportConfig::default())
        .await
        .unwrap();
    assert_eq!(platform, ControllerPlatform::ClassicController);
}

#[tokio::test]
async fn test_detect_platform_under_base_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/unifi/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/unifi/", server.uri())).unwrap();
    let platform = LegacyClient::detect_platform(&base, &TransportConfig::default())
        .await
        .unwrap();
    assert_eq!(platform, ControllerPlatform::UnifiOs);
}

// ── Client read tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_list_clients() {
    let (server, client) = setup().await;

    let envelope = ok_envelope(json!([
        {
            "_id": "sta001",
            "mac": "aa:bb:cc:dd:ee:01",
            "hostname": "laptop",
            "ip": "192.168.1.20",
            "is_wired": false
        },
        {
            "_id": "sta002",
            "mac": "aa:bb:cc:dd:ee:02",
            "name": "Living Room TV"
        }
    ]));

    Mock::given(method("GET"))
        .and(path(site_path("stat/sta")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let clients = client.list_clients().await.unwrap();

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].hostname.as_deref(), Some("laptop"));
    assert_eq!(clients[0].mac, "aa:bb:cc:dd:ee:01");
    assert_eq!(clients[1].hostname, None);
    assert_eq!(clients[1].name.as_deref(), Some("Living Room TV"));
}

#[tokio::test]
async fn test_list_users_carries_blocked_flag() {
    let (server, client) = setup().await;

    let envelope = ok_envelope(json!([
        { "_id": "u1", "mac": "aa:bb:cc:dd:ee:01", "hostname": "laptop", "blocked": true },
        { "_id": "u2", "mac": "aa:bb:cc:dd:ee:02", "noted": true }
    ]));

    Mock::given(method("GET"))
        .and(path(site_path("rest/user")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let users = client.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].blocked, Some(true));
    assert_eq!(users[1].blocked, None, "never-blocked clients carry no flag");
}

#[tokio::test]
async fn test_get_user_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("stat/user/aa:bb:cc:dd:ee:01")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "_id": "u1", "mac": "aa:bb:cc:dd:ee:01", "hostname": "laptop", "blocked": true }
        ]))))
        .mount(&server)
        .await;

    let user = client.get_user("aa:bb:cc:dd:ee:01").await.unwrap().unwrap();
    assert_eq!(user.hostname.as_deref(), Some("laptop"));
    assert_eq!(user.blocked, Some(true));
}

#[tokio::test]
async fn test_get_user_unknown_mac() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("stat/user/00:00:00:00:00:00")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.UnknownUser" },
            "data": []
        })))
        .mount(&server)
        .await;

    let user = client.get_user("00:00:00:00:00:00").await.unwrap();
    assert!(user.is_none());
}

// ── Command tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_block_client_posts_block_sta() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(site_path("cmd/stamgr")))
        .and(body_json(json!({ "cmd": "block-sta", "mac": "aa:bb:cc:dd:ee:01" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    client.block_client("aa:bb:cc:dd:ee:01").await.unwrap();
}

#[tokio::test]
async fn test_unblock_client_posts_unblock_sta() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(site_path("cmd/stamgr")))
        .and(body_json(json!({ "cmd": "unblock-sta", "mac": "aa:bb:cc:dd:ee:01" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    client.unblock_client("aa:bb:cc:dd:ee:01").await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_clients().await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert!(message.contains("session expired"), "got: {message}");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_legacy_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(site_path("cmd/stamgr")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.InvalidTarget" },
            "data": []
        })))
        .mount(&server)
        .await;

    let result = client.block_client("aa:bb:cc:dd:ee:01").await;

    match result {
        Err(Error::LegacyApi { ref message }) => {
            assert_eq!(message, "api.err.InvalidTarget");
        }
        other => panic!("expected LegacyApi error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unifi_os_error_shape() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("rest/user")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 401, "message": "Unauthorized" }
        })))
        .mount(&server)
        .await;

    let result = client.list_users().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(site_path("stat/sta")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let result = client.list_clients().await;
    match result {
        Err(Error::Deserialization { ref body, .. }) => assert!(body.contains("<html>")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
