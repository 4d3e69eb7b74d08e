//! Browser helpers for the generator component.
//!
//! - **User Feedback**: temporary toast notifications and readable failure
//!   messages for each backend error code.
//! - **Preview Blobs**: turning PDF bytes into an object URL the `<iframe>`
//!   can show, and releasing it again.
//! - **Formatting**: today's date for `date` fields and money amounts.

use common::responses::{ErrorCode, ErrorResponse};
use common::transport::PDF_MIME;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlElement, Url};

/// Displays a temporary notification at the bottom of the screen.
///
/// Failures get a red background. The toast removes itself after a few seconds.
pub fn show_toast(message: &str, is_error: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let background = if is_error {
                    "rgba(183, 28, 28, 0.92)"
                } else {
                    "rgba(0, 0, 0, 0.8)"
                };
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Wraps the PDF bytes in a `Blob` and returns an object URL for it.
pub fn pdf_object_url(bytes: &[u8]) -> Result<String, JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(PDF_MIME);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Url::create_object_url_with_blob(&blob)
}

pub fn revoke_object_url(url: &str) {
    Url::revoke_object_url(url).ok();
}

/// Today's date as `YYYY-MM-DD` (UTC).
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_utc_full_year(),
        now.get_utc_month() + 1,
        now.get_utc_date()
    )
}

/// `1234.5` → `"1,234.50 €"`.
pub fn format_amount(value: f64) -> String {
    let cents = (value * 100.0).round() as i128;
    format!(
        "{}.{:02} €",
        (cents / 100).to_formatted_string(&Locale::en),
        (cents % 100).abs()
    )
}

/// User-facing text for a failed generation.
pub fn describe_failure(error: &ErrorResponse) -> String {
    match error.code {
        ErrorCode::InvalidRequest => format!("The form could not be processed: {}", error.error),
        ErrorCode::UpstreamAuth => {
            "The text generation service rejected the server's API key.".to_string()
        }
        ErrorCode::GenerationEmpty => {
            "The text generation service returned an empty document. Try rephrasing your request."
                .to_string()
        }
        ErrorCode::CompileFailed => {
            "The generated LaTeX could not be compiled into a PDF. Please try again.".to_string()
        }
        ErrorCode::UpstreamError => format!("The text generation service failed: {}", error.error),
        ErrorCode::NetworkFailure => {
            "An upstream service could not be reached. Please try again.".to_string()
        }
        ErrorCode::Timeout => "Generation took too long and was cancelled.".to_string(),
    }
}
