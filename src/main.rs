mod config;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let app = routes::app(&config.site_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        site_dir = %config.site_dir.display(),
        "boulder guide listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
