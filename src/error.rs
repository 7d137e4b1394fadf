//! Error types for the Carga application.
//!
//! There is deliberately no central HTTP error translation: each handler and
//! client call site catches locally, logs, and degrades (a failed execution
//! save is reported to the user, failed description updates and deletes are
//! logged and swallowed).

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum CargaError {
    #[error("caused: {0}")]
    IllegalArgument(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carga_error_display() {
        let err = CargaError::IllegalArgument("invalid param".to_string());
        assert_eq!(format!("{}", err), "caused: invalid param");

        let err = CargaError::NotFound("migration configuration '42'".to_string());
        assert_eq!(format!("{}", err), "migration configuration '42' not found");

        let err = CargaError::NetworkError("connection timeout".to_string());
        assert_eq!(format!("{}", err), "network error: connection timeout");

        let err = CargaError::DatabaseError("query failed".to_string());
        assert_eq!(format!("{}", err), "database error: query failed");
    }

    #[test]
    fn test_carga_error_downcast_through_anyhow() {
        let err = anyhow::Error::from(CargaError::NotFound("record '7'".to_string()));
        assert!(err.downcast_ref::<CargaError>().is_some());
    }
}
