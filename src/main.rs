use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use idea_forge::config::{LoggingSettings, Settings};
use idea_forge::routes::{self, AppState};
use idea_forge::services::{DocumentExporter, ExportCapability, GeminiClient, EXPORT_UNAVAILABLE_WARNING};
use std::sync::Arc;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG takes precedence over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging);

    info!("Starting Idea Forge service...");
    info!("Configuration loaded successfully");

    // Initialize Gemini client
    let gemini = GeminiClient::from_settings(&settings.gemini).map_err(|e| {
        error!("Failed to initialize Gemini client: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Gemini client initialized (model: {})", gemini.model());

    // Resolve export capability once; the service keeps running without it
    let capability = ExportCapability::detect(settings.export.enabled);
    if capability.is_available() {
        info!("Word export enabled");
    } else {
        warn!("{}", EXPORT_UNAVAILABLE_WARNING);
    }

    // Build application state
    let app_state = AppState {
        gemini: Arc::new(gemini),
        exporter: DocumentExporter::new(capability),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
