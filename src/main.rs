use crate::shared::structs::config::Configuration;
use crate::shared::utility::initialize_tracing;

mod controller;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Configuration::load()?;
    initialize_tracing(&config);

    let app = controller::router();

    let server_bind_point = config.bind_address();
    tracing::info!("Starting interaction server on {}", &server_bind_point);

    let listener = tokio::net::TcpListener::bind(&server_bind_point).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
