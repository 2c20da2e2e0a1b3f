use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use sn_tutor_backend::config::AppConfig;
use sn_tutor_backend::routes;
use sn_tutor_backend::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sn_tutor_backend=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("🚀 S–N tutor backend running at http://{addr}");
    axum::serve(listener, app).await.unwrap();
}
