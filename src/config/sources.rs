use super::models::Config;
use config::{ConfigError, Environment, File, Map};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "MIMEPARSER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/mimeparser.toml";
const ENV_PREFIX: &str = "MIMEPARSER";
const ENV_SEPARATOR: &str = "__";
const ENV_LIST_SEPARATOR: &str = ",";
const ENV_LIST_KEYS: &[&str] = &["negotiation.available"];

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    report_dotenv(dotenvy::dotenv());

    let config_path = env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    load_from_sources(config_path)
}

/// Logs a `.env` file that exists but could not be read; returns whether it did.
fn report_dotenv(result: dotenvy::Result<PathBuf>) -> bool {
    match result {
        Err(err) if !err.not_found() => {
            tracing::warn!(error = %err, "Ignoring unreadable .env file");
            true
        }
        _ => false,
    }
}

/// Load configuration from a specific path and environment
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    load_with_environment(config_path, None)
}

/// `env` replaces the process environment when given
fn load_with_environment(
    config_path: PathBuf,
    env: Option<Map<String, String>>,
) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    // MIMEPARSER__NEGOTIATION__PRECISION -> negotiation.precision
    // MIMEPARSER__NEGOTIATION__AVAILABLE=text/html,application/json -> list
    let mut environment = Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
        .list_separator(ENV_LIST_SEPARATOR)
        .source(env);
    for key in ENV_LIST_KEYS {
        environment = environment.with_list_parse_key(key);
    }
    builder = builder.add_source(environment);

    let config = builder.build()?;
    config.try_deserialize()
}
