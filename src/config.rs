use std::env::var;

use dotenvy::dotenv;

use crate::utils::validate_membership;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub secret_key: String,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub database_url: Option<String>,
    pub token_ttl_secs: u64,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            secret_key: var("MEMOS_SECRET_KEY")
                .map_err(|_| "An error occured while getting MEMOS_SECRET_KEY env param")?,
            debug: parse_debug(&var("MEMOS_DEBUG").unwrap_or_else(|_| "false".to_string()))?,
            allowed_hosts: parse_allowed_hosts(
                &var("MEMOS_ALLOWED_HOSTS").unwrap_or_default(),
            ),
            database_url: var("DATABASE_URL").ok(),
            token_ttl_secs: match var("MEMOS_TOKEN_TTL_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .map_err(|_| "An error occured while parsing MEMOS_TOKEN_TTL_SECS env param")?,
                Err(_) => 86_400,
            },
        })
    }
}

fn parse_debug(raw: &str) -> Result<bool, &'static str> {
    let normalized = raw.to_ascii_lowercase();
    validate_membership(&normalized.as_str(), &["true", "false", "1", "0"])
        .map_err(|_| "An error occured while parsing MEMOS_DEBUG env param")?;
    Ok(normalized == "true" || normalized == "1")
}

fn parse_allowed_hosts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}
