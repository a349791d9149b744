use std::path::PathBuf;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "rivulet={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = engine::Engine::new();
    let seed_path = PathBuf::from(&settings.server.seed_file);
    tracing::info!("Seed data expected at {}", seed_path.display());

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    server::run_with_listener(engine, seed_path, listener).await?;

    Ok(())
}
