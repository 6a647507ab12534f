//! Snapshot fetch: one GET against the sheet-backed web app, returning
//! all three collections in a single payload.

use contracts::snapshot::ProductionSnapshot;
use gloo_net::http::Request;

/// Published web-app endpoint serving the production sheet as JSON.
const SNAPSHOT_URL: &str =
    "https://script.google.com/macros/s/AKfycbyHigh5ProductionBoard/exec";

pub async fn fetch_snapshot() -> Result<ProductionSnapshot, String> {
    let response = Request::get(SNAPSHOT_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Snapshot request failed: HTTP {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}
