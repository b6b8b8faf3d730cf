use city_api::{
    application::cities::CityService,
    config::{Config, StorageBackend},
    domain::city::CityRepository,
    infrastructure::{
        database::pool::{create_pool, run_migrations},
        monitoring::city_metrics,
        repositories::{InMemoryCityRepository, SqlxCityRepository},
    },
    presentation::http::{routes::create_router, state::AppState},
};
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG wins; otherwise fall back to the service defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,city_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    tracing::info!(backend = %config.storage_backend, "Configuration loaded");

    let (db, repository) = match config.storage_backend {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for postgres storage"))?;
            let db = create_pool(url, config.database_max_connections).await?;
            run_migrations(&db, config.ignore_missing_migrations).await?;
            let repository: Arc<dyn CityRepository> = Arc::new(SqlxCityRepository::new(db.clone()));
            (Some(db), repository)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; cities are lost on shutdown");
            let repository: Arc<dyn CityRepository> = Arc::new(InMemoryCityRepository::new());
            (None, repository)
        }
    };

    let state = AppState {
        db,
        city_service: Arc::new(CityService::new(repository)),
        metrics: Arc::new(city_metrics().await),
    };

    let allowed_methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = if cfg!(debug_assertions) {
        CorsLayer::new().allow_origin(tower_http::cors::Any)
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    }
    .allow_methods(allowed_methods)
    .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("City API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
