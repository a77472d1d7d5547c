use clap::Parser;

use todos::application::todo_service::TodoServiceImpl;
use todos::config::Args;
use todos::http::routing::{self, todos as todo_routes};
use todos::infrastructure::memory_repo::InMemoryTodoRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    todos::logging::init(args.log_level.as_deref());

    let addr = args.bind_addr()?;
    let repo = InMemoryTodoRepository::new();
    let service = TodoServiceImpl::new(repo, args.url_prefix);
    tracing::info!(url_prefix = %service.url_prefix(), "todo store ready");
    let router = routing::app(todo_routes::router(todo_routes::AppState { service }));

    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
