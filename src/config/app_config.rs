#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub log_level: String,
    pub workflow: WorkflowSettings,
}

/// Tunables of the application voting workflow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WorkflowSettings {
    pub quorum_threshold: usize,
    pub reject_duplicate_open_applications: bool,
}

impl WorkflowSettings {
    pub const DEFAULT_QUORUM_THRESHOLD: usize = 2;
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            quorum_threshold: Self::DEFAULT_QUORUM_THRESHOLD,
            reject_duplicate_open_applications: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "membership".to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            workflow: WorkflowSettings {
                quorum_threshold: std::env::var("APPLICATIONS_QUORUM_THRESHOLD")
                    .ok()
                    .and_then(|value| value.parse::<usize>().ok())
                    .filter(|value| *value >= 1)
                    .unwrap_or(WorkflowSettings::DEFAULT_QUORUM_THRESHOLD),
                reject_duplicate_open_applications: std::env::var(
                    "APPLICATIONS_REJECT_DUPLICATE_OPEN",
                )
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
            },
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
