use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_service::infrastructure::AppState;
use employee_service::{config, db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    let cli_profile = args
        .iter()
        .position(|arg| arg == "--profile")
        .and_then(|pos| args.get(pos + 1))
        .cloned();

    let config = match cli_profile {
        Some(profile) => config::Config::from_env_with_profile(Some(profile)),
        None => config::Config::from_env(),
    };
    tracing::info!("Using profile '{}'", config.profile);

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        let state = AppState::new(db.clone());
        match seed::seed_demo_data(&state.employee_service).await {
            Ok(n) => tracing::info!("Demo data seeded ({} new employees).", n),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    let app = server::build_router(db, &config.cors_allowed_origins);

    let (listener, addr) = match server::bind(config.port).await {
        Ok(bound) => bound,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Employee service listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }
}
