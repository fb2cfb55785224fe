//! Static file server for previewing a built site.

use std::{net::SocketAddr, path::Path};

use axum::Router;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the router serving `output_dir` under `base_path`, where the
/// generated links expect the site to live. Directory requests resolve to
/// their `index.html`.
pub fn create_router(output_dir: &Path, base_path: &str) -> Router {
    let files = ServeDir::new(output_dir).append_index_html_on_directories(true);
    let base = base_path.trim_end_matches('/');

    // axum rejects nesting at the root
    let router = if base.is_empty() {
        Router::new().fallback_service(files)
    } else {
        Router::new().nest_service(base, files)
    };

    router.layer(TraceLayer::new_for_http())
}

/// Serve `output_dir` on localhost until the process is interrupted.
pub async fn serve(output_dir: &Path, base_path: &str, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!(
        "  Serving {} at http://{addr}{}/",
        output_dir.display(),
        base_path.trim_end_matches('/')
    );
    println!("  Press Ctrl+C to stop");
    println!();

    tracing::info!(%addr, base_path, dir = %output_dir.display(), "server listening");

    axum::serve(listener, create_router(output_dir, base_path))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .wrap_err("Server error")?;

    Ok(())
}
