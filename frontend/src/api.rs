use gloo_net::http::Request;
use shared::DetectorConfig;

/// Loads the detector settings served next to the bundle.
pub async fn fetch_config() -> Result<DetectorConfig, String> {
    let response = Request::get("/api/config").send().await;

    match response {
        Ok(resp) if resp.ok() => resp
            .json::<DetectorConfig>()
            .await
            .map_err(|e| format!("Failed to parse config: {:?}", e)),
        Ok(resp) => {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(format!("Config request failed: {} - {}", status, body))
        }
        Err(e) => Err(format!("Network error: {:?}", e)),
    }
}
