mod routes;
mod services;
mod snapshot;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let store = services::store::SnapshotStore::from_env();
    tracing::info!(path = %store.path().display(), "snapshot store configured");

    let board = services::board::load_board(&store).await;
    let state = state::AppState::new(board, store);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "cardwall listening");
    axum::serve(listener, app).await.expect("server failed");
}
