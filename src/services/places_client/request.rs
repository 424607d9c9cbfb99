use serde_json::Value;
use tracing::debug;

use super::types::places_service_error::{PlacesError, Result};

/// Issues a single GET and decodes the body as JSON.
///
/// The status code is not inspected: whatever body comes back is decoded,
/// and shape checks are left to the caller.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    if url.trim().is_empty() {
        return Err(PlacesError::invalid_argument("Invalid request URL."));
    }

    let resp = client.get(url).send().await?;
    debug!(status = %resp.status(), path = resp.url().path(), "received places response");

    let body = resp.bytes().await?;
    let value = serde_json::from_slice(&body)?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn rejects_empty_url_without_request() {
        let client = reqwest::Client::new();

        let result = fetch_json(&client, "").await;
        assert!(matches!(result, Err(PlacesError::InvalidArgument(_))));

        let result = fetch_json(&client, "   ").await;
        assert!(matches!(result, Err(PlacesError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn decodes_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/data")
            .with_header("content-type", "application/json")
            .with_body(r#"{"predictions":[{"place_id":"1"}]}"#)
            .create_async()
            .await;

        let value = fetch_json(&reqwest::Client::new(), &format!("{}/data", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(value, json!({ "predictions": [{ "place_id": "1" }] }));
    }

    #[tokio::test]
    async fn decodes_body_regardless_of_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data")
            .with_status(500)
            .with_body(r#"{"status":"UNKNOWN_ERROR"}"#)
            .create_async()
            .await;

        let value = fetch_json(&reqwest::Client::new(), &format!("{}/data", server.url()))
            .await
            .unwrap();

        assert_eq!(value, json!({ "status": "UNKNOWN_ERROR" }));
    }

    #[tokio::test]
    async fn non_json_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/data")
            .with_body("<html>nope</html>")
            .create_async()
            .await;

        let result = fetch_json(&reqwest::Client::new(), &format!("{}/data", server.url())).await;

        assert!(matches!(result, Err(PlacesError::Decode(_))));
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        // Nothing listens on port 1.
        let result = fetch_json(&reqwest::Client::new(), "http://127.0.0.1:1/data").await;

        assert!(matches!(result, Err(PlacesError::Transport(_))));
    }

    #[tokio::test]
    async fn malformed_url_is_transport_error() {
        let result = fetch_json(&reqwest::Client::new(), "not a url").await;

        assert!(matches!(result, Err(PlacesError::Transport(_))));
    }
}
