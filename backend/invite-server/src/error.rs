use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] invite_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] invite_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] invite_auth::AuthError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid SMS configuration: {message}")]
    Sms { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
