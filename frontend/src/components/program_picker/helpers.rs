//! Browser-facing helpers for the program picker.
//!
//! Everything that touches the network, the console or a native dialog lives
//! here so `update.rs` only decides *when* to call it.

use common::model::program::ProgramCatalog;
use common::requests::LoadError;
use gloo_net::http::Request;
use web_sys::AbortSignal;

/// GETs the text of an example program.
///
/// Anything other than `200 OK` is an error; the body is returned untrimmed.
pub async fn fetch_program_text(
    path: &str,
    signal: Option<&AbortSignal>,
) -> Result<String, LoadError> {
    let response = Request::get(path)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    LoadError::check_status(response.status())?;

    response
        .text()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))
}

/// GETs the example catalogue served by the backend.
pub async fn fetch_catalog(url: &str) -> Result<ProgramCatalog, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    LoadError::check_status(response.status())?;

    response
        .json::<ProgramCatalog>()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))
}

/// Shows a native yes/no dialog. A missing window counts as "no".
pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

/// Writes a load failure to the browser console.
pub fn log_load_error(err: &LoadError) {
    match err {
        LoadError::Status(status) => gloo_console::log!("Error", *status),
        other => gloo_console::error!(other.to_string()),
    }
}
