use medical_catalog_service::create_app;
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3333".to_string())
        .parse::<u16>()
        .unwrap_or(3333);

    let app = create_app();
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    let addr = listener.local_addr()?;

    info!("Medical Document Catalog Service starting on {}", addr);
    info!("Documents endpoint: http://{}/documents", addr);
    info!("Filter options endpoint: http://{}/options", addr);
    info!("Health check endpoint: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
