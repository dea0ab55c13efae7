//! HTTP RPC Client
//!
//! Thin wrapper over the backend's `call_kw` endpoint.

use gloo_net::http::Request;

/// Default backend origin.
pub const DEFAULT_RPC_BASE: &str = "http://localhost:8069";

/// Path of the generic model-method dispatch endpoint.
const CALL_KW_PATH: &str = "/web/dataset/call_kw";

/// Local storage key holding the configured backend origin.
const RPC_BASE_KEY: &str = "propboard_rpc_url";

/// Get the RPC base URL from local storage or use the default.
pub fn get_rpc_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(RPC_BASE_KEY) {
                url
            } else {
                DEFAULT_RPC_BASE.to_string()
            }
        } else {
            DEFAULT_RPC_BASE.to_string()
        }
    } else {
        DEFAULT_RPC_BASE.to_string()
    };
    normalize_base(url)
}

/// Set the RPC base URL in local storage.
pub fn set_rpc_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(RPC_BASE_KEY, url);
        }
    }
}

/// Normalize: remove trailing slash
fn normalize_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Fixed logical call target for one dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RpcTarget {
    pub model: &'static str,
    pub method: &'static str,
}

#[derive(serde::Serialize)]
struct CallKwRequest<'a> {
    model: &'a str,
    method: &'a str,
    args: Vec<serde_json::Value>,
    kwargs: serde_json::Map<String, serde_json::Value>,
}

#[derive(serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Invoke `target.method` on `target.model` with no arguments and return the
/// raw JSON body.
///
/// Only transport-level failures are `Err` here. The backend may answer an
/// otherwise successful call with an embedded `error` field; callers must
/// branch on that explicitly.
pub async fn call_kw(target: &RpcTarget) -> Result<serde_json::Value, String> {
    let rpc_base = get_rpc_base();

    let response = Request::post(&format!("{}{}", rpc_base, CALL_KW_PATH))
        .json(&CallKwRequest {
            model: target.model,
            method: target.method,
            args: Vec::new(),
            kwargs: serde_json::Map::new(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: format!("Server returned HTTP {}", response.status()),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base("http://localhost:8069/".to_string()),
            "http://localhost:8069"
        );
        assert_eq!(
            normalize_base("http://localhost:8069".to_string()),
            "http://localhost:8069"
        );
    }

    #[test]
    fn call_kw_request_serializes_fixed_shape() {
        let body = serde_json::to_value(CallKwRequest {
            model: "property.dashboard",
            method: "get_kpis",
            args: Vec::new(),
            kwargs: serde_json::Map::new(),
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "model": "property.dashboard",
                "method": "get_kpis",
                "args": [],
                "kwargs": {},
            })
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn rpc_base_roundtrips_through_local_storage() {
        set_rpc_base("http://backend.test:8069/");
        assert_eq!(get_rpc_base(), "http://backend.test:8069");
    }
}
