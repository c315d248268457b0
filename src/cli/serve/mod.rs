//! Development server.
//!
//! Every request is rendered in memory from the current path and the
//! compiled-in catalogs; there is no on-disk build to serve from and no
//! state carried between requests.

mod response;

use crate::config::{SiteConfig, cfg};
use crate::core::{self, RequestPath};
use crate::{debug, embed, log, pages};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind the server and run the request loop until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    // Ctrl+C unblocks the accept loop through this handle.
    core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    run_request_loop(&server);
    Ok(())
}

/// Bind to the specified interface and port, with automatic port retry.
fn bind_with_retry(interface: std::net::IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

fn run_request_loop(server: &Server) {
    // Small pool so one slow client cannot block the others.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        pool.spawn(move || {
            let config = cfg();
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    if core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    // The stylesheet is served from memory at its fixed URL.
    if request.url() == embed::SITE_CSS_ROUTE {
        return response::respond_css(request);
    }

    let path = RequestPath::from_browser(request.url());
    debug!("serve"; "request {}", path);

    match pages::render_route(config, path.as_str()) {
        Some(html) => response::respond_html(request, 200, html),
        None => response::respond_not_found(request, config),
    }
}
