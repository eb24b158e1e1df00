use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub dataset: DatasetConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Sample data generation settings
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Fixed RNG seed; `None` draws from OS entropy (non-reproducible runs)
    pub seed: Option<u64>,
    /// Length of the trend window in days
    pub trend_days: u32,
    /// How many provinces the trend view preselects
    pub default_trend_provinces: usize,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            dataset: DatasetConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatasetConfig {
    pub const DEFAULT_TREND_DAYS: u32 = 30;
    pub const MAX_TREND_DAYS: u32 = 365;
    const DEFAULT_TREND_PROVINCES: usize = 3;

    pub fn from_env() -> Result<Self, String> {
        let seed = match env::var("DATASET_SEED").ok().filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| "DATASET_SEED must be a valid unsigned integer".to_string())?,
            ),
            None => None,
        };

        let trend_days = env::var("TREND_DAYS")
            .unwrap_or_else(|_| Self::DEFAULT_TREND_DAYS.to_string())
            .parse::<u32>()
            .map_err(|_| "TREND_DAYS must be a valid number".to_string())?;

        if !(1..=Self::MAX_TREND_DAYS).contains(&trend_days) {
            return Err(format!(
                "TREND_DAYS must be between 1 and {}",
                Self::MAX_TREND_DAYS
            ));
        }

        let default_trend_provinces = env::var("DEFAULT_TREND_PROVINCES")
            .unwrap_or_else(|_| Self::DEFAULT_TREND_PROVINCES.to_string())
            .parse::<usize>()
            .map_err(|_| "DEFAULT_TREND_PROVINCES must be a valid number".to_string())?;

        Ok(Self {
            seed,
            trend_days,
            default_trend_provinces,
        })
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trend_days: Self::DEFAULT_TREND_DAYS,
            default_trend_provinces: Self::DEFAULT_TREND_PROVINCES,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE")
            .unwrap_or_else(|_| "Dashboard Monitoring Pulau Sumatera API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Poverty, greenhouse gas and employment indicators for Sumatera".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
        };
        assert_eq!(app.server_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_dataset_config_default() {
        let dataset = DatasetConfig::default();
        assert_eq!(dataset.seed, None);
        assert_eq!(dataset.trend_days, 30);
        assert_eq!(dataset.default_trend_provinces, 3);
    }
}
