use axum::Router;
use redirects::{RedirectFormat, RedirectHandler};
use service_config::{ServiceConfig, config_path, get_config};
use std::{
    error::Error,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

mod custom_headers;
mod redirects;
mod responses;
mod routes;
mod service_config;

#[derive(Clone)]
pub struct ServiceState {
    pub config: ServiceConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    let config = get_config().await?;

    simple_logger::init_with_level(config.log_level)?;

    log::info!("Loaded config from {}", config_path().display());

    let state = ServiceState {
        config: config.clone(),
    };
    let fallback = routes::create_router().with_state(state);

    log::info!("Building inline redirects");
    let inline = RedirectHandler::from_map(config.paths, fallback);

    let app = match config.redirects_file {
        Some(path) => {
            log::info!("Loading redirects from {}", path.display());
            let document = tokio::fs::read(&path).await?;
            let handler =
                RedirectHandler::from_document(&document, RedirectFormat::from_path(&path), inline)?;
            Router::new().fallback_service(handler)
        }
        None => Router::new().fallback_service(inline),
    };

    let addr = SocketAddr::from((IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log::info!("Starting server on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
