//! PNG export of the rendered board canvas.
//!
//! Capture happens in the browser: the canvas is rasterized with
//! `toDataURL` and handed to a synthesized anchor click. Failure is logged
//! and reported to the caller; it never takes the session down.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("canvas element not found: {0}")]
    CanvasMissing(String),
    #[error("canvas capture failed")]
    Capture,
    #[error("export unavailable outside the browser")]
    Unavailable,
}

/// File name for a session export: whitespace runs become single
/// underscores, then the `.png` extension.
#[must_use]
pub fn export_file_name(session_name: &str) -> String {
    let mut out = String::with_capacity(session_name.len() + 4);
    let mut in_run = false;
    for ch in session_name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out.push_str(".png");
    out
}

/// Rasterize the canvas with id `canvas_id` and trigger a download named
/// after the session.
///
/// # Errors
///
/// Returns an [`ExportError`] (also logged) when the canvas is missing or
/// capture fails, and [`ExportError::Unavailable`] outside the browser.
pub fn export_png(canvas_id: &str, session_name: &str) -> Result<(), ExportError> {
    #[cfg(feature = "hydrate")]
    {
        let result = capture(canvas_id, session_name);
        if let Err(err) = &result {
            log::error!("export failed: {err}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (canvas_id, session_name);
        Err(ExportError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn capture(canvas_id: &str, session_name: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ExportError::Capture)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| ExportError::CanvasMissing(canvas_id.to_owned()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| ExportError::CanvasMissing(canvas_id.to_owned()))?;
    let url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| ExportError::Capture)?;

    let anchor = document
        .create_element("a")
        .map_err(|_| ExportError::Capture)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Capture)?;
    anchor.set_download(&export_file_name(session_name));
    anchor.set_href(&url);
    anchor.click();
    Ok(())
}
