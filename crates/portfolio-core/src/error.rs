//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog content failed validation
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::InvalidCatalog("no projects".to_string());
        assert_eq!(format!("{}", err), "Invalid catalog: no projects");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
