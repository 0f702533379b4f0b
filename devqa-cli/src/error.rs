use std::fmt;

/// Main error type for the devqa CLI
#[derive(Debug)]
pub enum CliError {
    /// Configuration-related errors
    Config(String),
    /// Bad command-line input
    Command(String),
    /// Communication with the Q&A backend
    Communication(String),
    /// Question id unknown to both the backend and the demo catalog
    NotFound(String),
    /// Generic errors from anyhow
    Other(anyhow::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Command(msg) => write!(f, "Command error: {msg}"),
            CliError::Communication(msg) => write!(f, "Communication error: {msg}"),
            CliError::NotFound(msg) => write!(f, "Not found: {msg}"),
            CliError::Other(err) => write!(f, "Error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl CliError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 2,
            CliError::Command(_) => 5,
            CliError::NotFound(_) => 6,
            CliError::Communication(_) => 7,
            CliError::Other(_) => 1,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            CliError::Config("x".into()),
            CliError::Command("x".into()),
            CliError::Communication("x".into()),
            CliError::NotFound("x".into()),
            CliError::Other(anyhow::anyhow!("x")),
        ];
        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_includes_kind() {
        let err = CliError::NotFound("question q9".to_string());
        assert_eq!(err.to_string(), "Not found: question q9");
    }
}
