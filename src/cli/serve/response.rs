//! HTTP response handlers.

use crate::config::SiteConfig;
use crate::{embed, pages};
use anyhow::Result;
use tiny_http::{Header, Method, Request, Response, StatusCode};

const HTML: &str = "text/html; charset=utf-8";
const CSS: &str = "text/css";
const PLAIN: &str = "text/plain";

/// Respond with a rendered HTML page.
pub fn respond_html(request: Request, status: u16, body: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, status, HTML);
    }
    send_body(request, status, HTML, body.into_bytes())
}

/// Respond with the embedded stylesheet.
pub fn respond_css(request: Request) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, CSS);
    }
    send_body(request, 200, CSS, embed::SITE_CSS.as_bytes().to_vec())
}

/// Respond with the rendered 404 page.
pub fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, HTML);
    }
    let body = pages::render_not_found(config);
    send_body(request, 404, HTML, body.into_bytes())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).expect("static header is valid")
}
