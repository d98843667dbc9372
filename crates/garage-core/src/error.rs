use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("ServiceError: {0}")]
    Service(#[from] ServiceError),
    #[error("TransportError: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("No row menu is open")]
    NoOpenMenu,
    #[error("Unknown action '{label}'")]
    UnknownAction { label: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("Email '{email}' is already registered")]
    DuplicateEmail { email: String },
    #[error("Record '{id}' already exists in {table}")]
    DuplicateRecord { table: String, id: String },
    #[error("Record '{id}' not found in {table}")]
    RecordNotFound { table: String, id: String },
    #[error("Corrupt row in {table}: {message}")]
    CorruptRow { table: String, message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
    #[error("Data directory not found")]
    DataDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Pagination error: {0}")]
    Pagination(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Channel '{channel}' is closed")]
    Closed { channel: String },
    #[error("No handler registered for channel '{channel}'")]
    UnknownChannel { channel: String },
    #[error("Malformed payload on channel '{channel}': {message}")]
    Payload { channel: String, message: String },
    #[error("{0}")]
    Remote(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::Database(_) | StorageError::CorruptRow { .. } => {
                    ErrorSeverity::Critical
                }
                StorageError::DuplicateEmail { .. }
                | StorageError::DuplicateRecord { .. }
                | StorageError::RecordNotFound { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Service(_) => ErrorSeverity::Medium,
            AppError::Transport(_) => ErrorSeverity::High,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Storage(StorageError::DuplicateEmail { .. }) => {
                Some("'garage users list' shows the registered emails".to_string())
            }
            AppError::Storage(StorageError::Database(_)) => Some(
                "Check the database path with 'garage config show' or pass --database".to_string(),
            ),
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("Fix or remove the config.toml file and try again".to_string())
            }
            AppError::Cli(CliError::NoOpenMenu) => {
                Some("Open a row menu with --menu <ID> before using --invoke".to_string())
            }
            AppError::Display(DisplayError::Pagination(_)) => {
                Some("Page size must be at least 1".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::InvalidArguments("invalid arguments".to_string());
        assert_eq!(
            format!("{}", cli_err),
            "Invalid arguments: invalid arguments"
        );
        let cli_err = CliError::UnknownAction {
            label: "Fly".to_string(),
        };
        assert_eq!(format!("{}", cli_err), "Unknown action 'Fly'");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::DuplicateEmail {
            email: "ahmet@example.com".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Email 'ahmet@example.com' is already registered"
        );

        let err = StorageError::RecordNotFound {
            table: "customers".to_string(),
            id: "42".to_string(),
        };
        assert!(matches!(err, StorageError::RecordNotFound { .. }));
        if let StorageError::RecordNotFound { table, id } = err {
            assert_eq!(table, "customers");
            assert_eq!(id, "42");
        }
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidValue {
            field: "items_per_page".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Invalid configuration value for 'items_per_page': 0 (must be positive)"
        );
    }

    #[test]
    fn test_app_error_wraps_sources() {
        let app_err = AppError::Display(DisplayError::Pagination("zero".to_string()));
        assert_eq!(
            format!("{}", app_err),
            "DisplayError: Pagination error: zero"
        );
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
        assert!(app_err.troubleshooting_hint().is_some());

        let app_err: AppError = TransportError::Closed {
            channel: "get-users".to_string(),
        }
        .into();
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert_eq!(
            format!("{}", app_err),
            "TransportError: Channel 'get-users' is closed"
        );
    }

    #[test]
    fn test_duplicate_email_severity_and_hint() {
        let app_err = AppError::Storage(StorageError::DuplicateEmail {
            email: "a@b.co".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
        assert_eq!(
            app_err.troubleshooting_hint(),
            Some("'garage users list' shows the registered emails".to_string())
        );
    }

    #[test]
    fn test_service_error_display() {
        let service_err = ServiceError::Validation {
            field: "email".to_string(),
            message: "must contain @".to_string(),
        };
        assert_eq!(
            format!("{}", service_err),
            "Validation error: email: must contain @"
        );
    }
}
