//! Gateway configuration

use std::time::Duration;

use platform::config::{self, ConfigError};
use platform::token::TokenKeys;

pub const DEFAULT_PORT: u16 = 8080;

/// Base URLs of the services behind the gateway
#[derive(Debug, Clone)]
pub struct Upstreams {
    pub users: String,
    pub products: String,
    pub cart: String,
    pub orders: String,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub upstreams: Upstreams,
    pub token_keys: TokenKeys,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = config::required("JWT_SECRET")?;
        let token_keys = TokenKeys::from_secret(&secret).map_err(|e| ConfigError::Invalid {
            name: "JWT_SECRET".to_string(),
            value: String::new(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            upstreams: Upstreams {
                users: url_or("USER_SERVICE_URL", "http://user-service:8081"),
                products: url_or("PRODUCT_SERVICE_URL", "http://product-service:8082"),
                cart: url_or("CART_SERVICE_URL", "http://cart-service:8084"),
                orders: url_or("ORDER_SERVICE_URL", "http://order-service:8083"),
            },
            token_keys,
            timeout: config::http_timeout()?,
        })
    }
}

fn url_or(name: &str, default: &str) -> String {
    config::optional(name).unwrap_or_else(|| default.to_string())
}
