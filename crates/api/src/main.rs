use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    caravel_observability::init();

    let app = caravel_api::app::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .context("failed to bind 0.0.0.0:8080")?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
