use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use lang_portal_backend::config::Config;
use lang_portal_backend::db::{migrate, seed, Db};
use lang_portal_backend::logging;
use lang_portal_backend::create_app;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    let _log_guard = logging::init_tracing(&config.log_level);

    // No database, no service.
    let db = match Db::connect(&config.database_url()).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(error = %err, "failed to open database, aborting");
            std::process::exit(1);
        }
    };

    // Migration and seed failures are tolerated so a pre-existing populated
    // database does not block startup.
    if let Err(err) = migrate::run_migrations(db.pool()).await {
        tracing::warn!(error = %err, "migration failed");
    }
    if let Err(err) = seed::seed(db.pool()).await {
        tracing::warn!(error = %err, "seeding data failed");
    }

    let cors = cors_layer(&config);
    let app = create_app(db, config.mastery_threshold)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = config.bind_addr();
    tracing::info!(%addr, "lang-portal backend listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, %addr, "failed to bind listener");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    if let Err(err) = server.await {
        tracing::error!(error = %err, "server error");
    }

    tracing::info!("HTTP server stopped");
}

/// Browser frontend runs on another port; allow it explicitly, with
/// credentials.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = config
        .frontend_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
