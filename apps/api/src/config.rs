use anyhow::{Context, Result};

use crate::planner::service::DEFAULT_CREDIT_CEILING;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_PLAN_NAME_PATTERN: &str = "BSCS";
const DEFAULT_RETRIEVAL_TOP_K: i64 = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:8000";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Soft per-semester credit limit used by the planner.
    pub credit_ceiling: f64,
    /// Substring used to pick the degree plan when a request names none.
    pub plan_name_pattern: String,
    pub retrieval_top_k: i64,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let credit_ceiling = match lookup("CREDIT_CEILING") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|c| c.is_finite() && *c > 0.0)
                .context("CREDIT_CEILING must be a positive number")?,
            None => DEFAULT_CREDIT_CEILING,
        };

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            anthropic_api_key: require("ANTHROPIC_API_KEY")?,
            port: match lookup("PORT") {
                Some(raw) => raw.parse::<u16>().context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            credit_ceiling,
            plan_name_pattern: lookup("PLAN_NAME_PATTERN")
                .unwrap_or_else(|| DEFAULT_PLAN_NAME_PATTERN.to_string()),
            retrieval_top_k: match lookup("RETRIEVAL_TOP_K") {
                Some(raw) => raw
                    .parse::<i64>()
                    .ok()
                    .filter(|k| *k > 0)
                    .context("RETRIEVAL_TOP_K must be a positive integer")?,
                None => DEFAULT_RETRIEVAL_TOP_K,
            },
            cors_origins: parse_origins(
                &lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
            ),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
