use invite_server::error::{Result as ServerErrorResult, ServerError};
use invite_server::{AppState, Metrics, build_router, logger};

use invite_auth::{JwtAlgorithm, JwtValidator};
use invite_config::Config;
use invite_core::PhoneNumber;
use invite_db::{ContentSeed, Database, FeedRepository};
use invite_sms::{LogSender, SmsSender, TwilioOptions, TwilioSender};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use sqlx::SqlitePool;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting invite-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = Database::open(&database_path).await?;
    info!("Database ready");

    seed_content(&pool, &config).await?;

    let jwt_validator = Arc::new(build_jwt_validator(&config)?);
    let sms = build_sms_sender(&config)?;

    let app_state = AppState {
        pool,
        jwt_validator,
        sms,
        sms_brand: config.sms.brand.clone(),
        default_school: config.content.default_school.clone(),
        metrics: Metrics::new(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual address matters when port is 0 (auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn build_jwt_validator(config: &Config) -> ServerErrorResult<JwtValidator> {
    let validator = JwtValidator::from_algorithm(jwt_algorithm(config)?)?;
    info!("JWT: {} verification enabled", validator.algorithm());
    Ok(validator)
}

/// HS256 when a shared secret is configured, otherwise RS256 from the key file
fn jwt_algorithm(config: &Config) -> ServerErrorResult<JwtAlgorithm> {
    if let Some(ref secret) = config.auth.jwt_secret {
        return Ok(JwtAlgorithm::HS256 {
            secret: secret.as_bytes().to_vec(),
        });
    }

    match config.jwt_public_key_path()? {
        Some(full_path) => {
            let public_key_pem =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            Ok(JwtAlgorithm::RS256 { public_key_pem })
        }
        None => Err(ServerError::Config(invite_config::ConfigError::auth(
            "no JWT verification key configured",
        ))),
    }
}

fn build_sms_sender(config: &Config) -> ServerErrorResult<Arc<dyn SmsSender>> {
    let sms = &config.sms;
    if !sms.enabled {
        warn!("SMS DISABLED - invite codes will be written to the log");
        return Ok(Arc::new(LogSender));
    }

    // validate() guarantees these are present
    let (Some(account_sid), Some(auth_token), Some(from_phone)) =
        (&sms.account_sid, &sms.auth_token, &sms.from_phone)
    else {
        return Err(ServerError::Sms {
            message: "sms.account_sid, sms.auth_token and sms.from_phone are required".into(),
        });
    };

    let from = PhoneNumber::parse(from_phone).map_err(|e| ServerError::Sms {
        message: e.to_string(),
    })?;

    info!("SMS: Twilio via {}", sms.api_base);
    Ok(Arc::new(TwilioSender::new(TwilioOptions {
        account_sid: account_sid.clone(),
        auth_token: auth_token.clone(),
        from,
        api_base: sms.api_base.clone(),
    })))
}

async fn seed_content(pool: &SqlitePool, config: &Config) -> ServerErrorResult<()> {
    let Some(seed_path) = config.seed_path()? else {
        info!("No content seed configured");
        return Ok(());
    };

    let seed = ContentSeed::from_file(&seed_path).await?;
    FeedRepository::new(pool.clone()).seed(&seed).await?;
    info!(
        "Seeded {} courses and {} tests from {}",
        seed.courses.len(),
        seed.tests.len(),
        seed_path.display()
    );

    Ok(())
}
