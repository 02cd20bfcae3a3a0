mod config;
mod proxy;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let app = routes::app(&config).expect("router init failed");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, backend = %config.backend_url, "marinelib listening");
    axum::serve(listener, app).await.expect("server failed");
}
