use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::config::AcademyConfig;
use crate::data::catalog::Catalog;

use super::route;

/// Lightweight HTTP server for the academy JSON endpoints.
///
/// Every request reloads the spreadsheet, so edits to the source show up
/// without a restart and concurrent requests never share a catalog.
pub async fn serve(config: AcademyConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.api_addr).await?;
    log::info!("Academy API listening on http://{}", listener.local_addr()?);
    run(listener, Arc::new(config)).await;
    Ok(())
}

/// Accept loop on an already bound listener.
pub async fn run(listener: TcpListener, config: Arc<AcademyConfig>) {
    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Academy API accept error: {e}");
                continue;
            }
        };
        log::debug!("Connection from {addr}");

        let config = Arc::clone(&config);
        tokio::spawn(async move {
            if let Err(e) = handle(stream, &config).await {
                log::warn!("Academy API connection from {addr} failed: {e}");
            }
        });
    }
}

async fn handle(mut stream: TcpStream, config: &AcademyConfig) -> std::io::Result<()> {
    let mut buf = [0u8; 4096];
    let n = stream.read(&mut buf).await?;
    if n == 0 {
        return Ok(());
    }
    let request = String::from_utf8_lossy(&buf[..n]);

    // Request line: METHOD TARGET VERSION
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let target = parts.next().unwrap_or("/").to_string();

    let path = config.spreadsheet_path.clone();
    let hero_from_first_course = config.hero_from_first_course;
    let catalog = tokio::task::spawn_blocking(move || {
        let catalog = Catalog::load_or_default(&path);
        if hero_from_first_course {
            catalog.with_hero_from_first_course()
        } else {
            catalog
        }
    })
    .await
    .map_err(std::io::Error::other)?;

    let response = route(&method, &target, &catalog, config.related_limit);
    log::info!("{method} {target} -> {}", response.status);
    stream.write_all(response.to_http().as_bytes()).await?;
    stream.shutdown().await
}
