//! HTTP API Client
//!
//! Functions for communicating with the Vigil REST API.

use gloo_net::http::Request;

use crate::state::global::{FallRecord, StatsSnapshot};

/// Default API base URL (same origin as the dashboard)
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("vigil_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// One page of fall records
#[derive(Debug, serde::Deserialize)]
pub struct FallsPage {
    pub falls: Vec<FallRecord>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

/// Signed-URL lookup result; `url` is absent when the video is unavailable
#[derive(Debug, serde::Deserialize)]
pub struct VideoUrlResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Fetch the aggregated fall statistics
pub async fn fetch_stats() -> Result<StatsSnapshot, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/stats", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch one page of fall records
pub async fn fetch_falls(page: u32, per_page: u32) -> Result<FallsPage, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/api/falls?page={}&per_page={}",
        api_base, page, per_page
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Look up a signed playback URL for a stored video reference.
///
/// Returns `Ok(None)` when the backend answers without a `url` field,
/// which is how it reports an unavailable video.
pub async fn fetch_video_url(reference: &str) -> Result<Option<String>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/video/{}", api_base, reference))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let body: VideoUrlResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(body.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_page_ignores_extra_fields() {
        // the backend also sends has_next, which is derivable and unused
        let json = r#"{"falls": [], "total": 35, "page": 2, "per_page": 10, "has_next": true}"#;
        let page: FallsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 35);
        assert_eq!(page.page, 2);
        assert!(page.falls.is_empty());
    }

    #[test]
    fn test_video_url_absent_means_unavailable() {
        let body: VideoUrlResponse = serde_json::from_str(r#"{"error": "Video not found"}"#).unwrap();
        assert_eq!(body.url, None);

        let body: VideoUrlResponse =
            serde_json::from_str(r#"{"url": "https://storage.example/signed"}"#).unwrap();
        assert_eq!(body.url.as_deref(), Some("https://storage.example/signed"));
    }
}
