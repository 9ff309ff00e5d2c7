use thiserror::Error;

/// Failure of one controller operation, surfaced to the user as an alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// The backend answered with parseable JSON but a non-success status.
    #[error("{0}")]
    Rejected(&'static str),
    /// Transport failure, malformed JSON, or a payload missing its field.
    #[error("Error de conexión: {0}")]
    Connection(String),
}

impl OperationError {
    pub fn connection(err: impl std::fmt::Display) -> Self {
        Self::Connection(err.to_string())
    }
}

impl From<reqwest::Error> for OperationError {
    fn from(err: reqwest::Error) -> Self {
        Self::connection(err)
    }
}

/// The filter form was submitted without a column or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Por favor, selecciona columna y ingresa un valor")]
pub struct MissingInput;

/// The record id is empty or a dot segment, which would address a
/// different endpoint once the URL is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Por favor, ingresa un id de registro válido")]
pub struct InvalidRecordId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("backend url {0:?} must use http or https")]
    UnsupportedScheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_keeps_underlying_text() {
        let err = OperationError::connection("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Error de conexión: expected value at line 1 column 1"
        );
    }

    #[test]
    fn rejected_error_is_the_fixed_message() {
        let err = OperationError::Rejected("Error al cargar datos");
        assert_eq!(err.to_string(), "Error al cargar datos");
    }
}
