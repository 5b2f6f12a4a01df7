use anyhow::anyhow;
use leavedesk_domain::{TransitionPolicy, DEFAULT_ANNUAL_CAP};
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr};

pub const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;
/// Longest accepted token lifetime: one year.
pub const MAX_JWT_EXPIRATION_HOURS: u64 = 24 * 366;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    pub annual_leave_cap: u32,
    pub status_transitions: TransitionPolicy,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr_raw = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-this-in-production".to_string());

        let jwt_expiration_hours = match env::var("JWT_EXPIRATION_HOURS") {
            Ok(raw) => parse_expiration_hours(&raw)?,
            Err(_) => DEFAULT_JWT_EXPIRATION_HOURS,
        };

        let annual_leave_cap = match env::var("ANNUAL_LEAVE_CAP") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow!("Invalid ANNUAL_LEAVE_CAP value: {}", raw))?,
            Err(_) => DEFAULT_ANNUAL_CAP,
        };

        let status_transitions = match env::var("STATUS_TRANSITIONS") {
            Ok(raw) => raw.parse::<TransitionPolicy>().map_err(|e| anyhow!(e))?,
            Err(_) => TransitionPolicy::default(),
        };

        Ok(Config {
            bind_addr,
            jwt_secret,
            jwt_expiration_hours,
            annual_leave_cap,
            status_transitions,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            jwt_secret: "your-secret-key-change-this-in-production".to_string(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            annual_leave_cap: DEFAULT_ANNUAL_CAP,
            status_transitions: TransitionPolicy::default(),
        }
    }
}

fn parse_expiration_hours(raw: &str) -> anyhow::Result<u64> {
    let hours: u64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid JWT_EXPIRATION_HOURS value: {}", raw))?;
    if hours == 0 || hours > MAX_JWT_EXPIRATION_HOURS {
        return Err(anyhow!(
            "JWT_EXPIRATION_HOURS must be between 1 and {}, got {}",
            MAX_JWT_EXPIRATION_HOURS,
            hours
        ));
    }
    Ok(hours)
}
