use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_name: String,
    pub env: String,
    pub firebase_key_path: String,
    /// Overrides the project id found in the Firebase key file.
    pub firebase_project_id: Option<String>,
    pub openai_api_key: String,
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            project_name: optional_env("PROJECT_NAME", "SkillRoute"),
            env: optional_env("ENV", "development"),
            firebase_key_path: optional_env("FIREBASE_KEY_PATH", "firebase_key.json"),
            firebase_project_id: std::env::var("FIREBASE_PROJECT_ID")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            openai_api_key: require_env("OPENAI_API_KEY")?,
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Configuration used by router tests; no variable is read from the process.
    pub fn for_tests() -> Self {
        Config {
            project_name: "SkillRoute".to_string(),
            env: "test".to_string(),
            firebase_key_path: "firebase_key.json".to_string(),
            firebase_project_id: Some("skillroute-test".to_string()),
            openai_api_key: "sk-test".to_string(),
            database_url: "postgres://localhost/skillroute_test".to_string(),
            port: 8080,
            rust_log: "debug".to_string(),
        }
    }
}
