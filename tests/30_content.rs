mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn root_serves_message_and_timestamp_without_auth() -> Result<()> {
    let app = common::spawn_app().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Profile lookup service")
    );

    let timestamp = body
        .get("timestamp")
        .and_then(Value::as_str)
        .expect("missing timestamp");
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "unparseable timestamp: {}",
        timestamp
    );

    Ok(())
}
