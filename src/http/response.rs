//! HTML response construction.
//!
//! The service answers with small self-contained pages: a greeting page for
//! resolved queries and a minimal error page for refused ones.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Literal greeting served ahead of every computed subnet.
pub const GREETING: &str = "Hello! The subnet is: ";

const PAGE_TITLE: &str = "Response from subnet-resolver";

/// Render the success page for a resolved query.
pub fn subnet_page(result: &str) -> String {
    let mut html = String::from("<!DOCTYPE html><html>");
    html.push_str("<head><title>");
    html.push_str(PAGE_TITLE);
    html.push_str("</title></head>");
    html.push_str("<body><p><h1>");
    html.push_str(GREETING);
    html.push_str(result);
    html.push_str("</h1></p></body>");
    html.push_str("</html>");
    html
}

/// Render the error page for a refused request.
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{} {}</title></head><body><p><h1>Error {}: {}</h1></p></body></html>",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error"),
        status.as_u16(),
        message
    )
}

/// Build a complete error response with the page as body.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Html(error_page(status, message))).into_response()
}
