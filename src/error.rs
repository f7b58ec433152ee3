/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Missing element: {0}")]
    MissingElement(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::MissingElement("loader".to_string()).to_string(),
            "Missing element: loader"
        );
        assert_eq!(
            AppError::ExternalApi("status 500".to_string()).to_string(),
            "External API error: status 500"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let app_err: AppError = err.into();
        assert!(app_err.to_string().starts_with("Failed to parse response"));
    }
}
