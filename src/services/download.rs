use crate::models::{error::AppError, esg::ReportFormat};
use crate::services::api::ApiConfig;
use wasm_bindgen::JsValue;

/// Opens the report endpoint in a new browsing context and lets the backend's
/// `Content-Disposition` drive the download.
pub fn open_report(config: &ApiConfig, format: ReportFormat) -> Result<(), AppError> {
    let url = config.download_url(format);
    let window =
        web_sys::window().ok_or_else(|| AppError::Browser("window unavailable".to_string()))?;

    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e: JsValue| AppError::Browser(format!("Failed to open {url}: {e:?}")))?;

    Ok(())
}
