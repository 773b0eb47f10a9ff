//! Report board server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use report_board_lib::api;
use report_board_lib::config::Config;
use report_board_lib::db::DbPool;
use report_board_lib::middleware::{RequestLogger, unhandled_errors};
use report_board_lib::services;

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    Config::from_env().is_ok()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    if std::env::args().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL and RB_CORS_ORIGIN must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Report Board Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database connection established");

    if let Err(e) = pool.run_migrations().await {
        error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }
    info!("Database migrations complete");

    // Storage is ready; seed exactly once before serving
    services::run_seed(&pool).await;

    let bind_address = config.bind_address();
    let cors_origin = config.cors_origin.clone();
    let static_dir = config.static_dir.clone();
    let uploads_dir = config.uploads_dir.clone();
    let max_body_size = config.max_body_size;

    info!("CORS allowed origin: {}", cors_origin);
    info!(
        "Serving static files from {:?}, uploads from {:?}",
        static_dir, uploads_dir
    );

    let worker_count = if config.is_development() {
        4
    } else {
        num_cpus::get()
    };
    info!(
        "Server is running at http://{} ({} workers)",
        bind_address, worker_count
    );

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            // Innermost: 5xx responses without a JSON body are rewritten
            .wrap(unhandled_errors())
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(api::payload_config(max_body_size))
            .configure(api::configure_routes)
            .configure(|cfg| api::configure_static(cfg, &static_dir, &uploads_dir))
    });

    server
        .workers(worker_count)
        .bind(&bind_address)?
        .run()
        .await
}
