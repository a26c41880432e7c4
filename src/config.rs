use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub api_base_url: String,
    pub openai_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let listen_addr: SocketAddr = env::var("MOTORDEX_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("invalid MOTORDEX_ADDR")?;

        let api_base_url = env::var("MOTORDEX_API_BASE_URL")
            .unwrap_or_else(|_| "https://cars-api.rafaelcetina.com".to_string());

        // Consumed by the remote API deployment, not by request code; still
        // required so a misconfigured instance fails at startup.
        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is required")?;

        Ok(Self {
            listen_addr,
            api_base_url,
            openai_api_key,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
