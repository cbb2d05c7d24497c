use std::{env, path::PathBuf};

use crate::checkout::Pricing;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cart_storage_dir: PathBuf,
    pub jwt_secret: Option<String>,
    pub razorpay_key_id: String,
    pub pricing: Pricing,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let cart_storage_dir = env::var("CART_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let jwt_secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());
        if jwt_secret.is_none() {
            tracing::warn!("JWT_SECRET is not set; checkout routes will reject every request");
        }
        let razorpay_key_id = env::var("RAZORPAY_KEY_ID")
            .unwrap_or_else(|_| "rzp_test_yourtestkeyid".to_string());

        let defaults = Pricing::default();
        let shipping_cost = match env::var("SHIPPING_COST") {
            Ok(raw) => raw.parse::<i64>()?,
            Err(_) => defaults.shipping_cost,
        };
        let tax_rate_percent = match env::var("TAX_RATE_PERCENT") {
            Ok(raw) => raw.parse::<i64>()?,
            Err(_) => defaults.tax_rate_percent,
        };
        anyhow::ensure!(shipping_cost >= 0, "SHIPPING_COST must not be negative");
        anyhow::ensure!(
            (0..=100).contains(&tax_rate_percent),
            "TAX_RATE_PERCENT must be between 0 and 100"
        );

        Ok(Self {
            host,
            port,
            cart_storage_dir,
            jwt_secret,
            razorpay_key_id,
            pricing: Pricing {
                shipping_cost,
                tax_rate_percent,
            },
        })
    }
}
