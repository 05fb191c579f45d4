use std::env;

/// Deployment environment the process runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Development,
    Test,
}

impl Environment {
    /// Parse `APP_ENV`, falling back to development for unknown values
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            other => {
                tracing::warn!("Unknown APP_ENV '{}', using development", other);
                Environment::Development
            }
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub environment: Environment,
    /// Location of the production data source, if one is provisioned
    pub data_source_url: Option<String>,
}

impl Config {
    /// Read configuration from the process environment
    ///
    /// Does not load `.env`; the binary does that once at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
            data_source_url: lookup("DATA_SOURCE_URL").filter(|url| !url.trim().is_empty()),
        }
    }

    /// Check if a real data source can be resolved
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production && self.data_source_url.is_some()
    }
}
