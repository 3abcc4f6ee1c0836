use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub default_treatment_duration_minutes: u32,
    pub break_minute_precision: bool,
    pub seed_demo_data: bool,
    pub nearby_default_radius_km: f64,
    pub nearby_max_results: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_treatment_duration_minutes: 30,
            break_minute_precision: false,
            seed_demo_data: true,
            nearby_default_radius_km: 50.0,
            nearby_max_results: 50,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| {
                warn!("HOST not set, using {}", defaults.host);
                defaults.host.clone()
            }),
            port: parse_var("PORT", defaults.port),
            default_treatment_duration_minutes: parse_var(
                "DEFAULT_TREATMENT_DURATION_MINUTES",
                defaults.default_treatment_duration_minutes,
            ),
            break_minute_precision: parse_var("BREAK_MINUTE_PRECISION", defaults.break_minute_precision),
            seed_demo_data: parse_var("SEED_DEMO_DATA", defaults.seed_demo_data),
            nearby_default_radius_km: parse_var("NEARBY_DEFAULT_RADIUS_KM", defaults.nearby_default_radius_km),
            nearby_max_results: parse_var("NEARBY_MAX_RESULTS", defaults.nearby_max_results),
        };

        if !config.is_valid() {
            warn!("Application configuration has out-of-range values, check durations and radius");
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        self.default_treatment_duration_minutes > 0
            && self.nearby_default_radius_km > 0.0
            && self.nearby_max_results > 0
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
