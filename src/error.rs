// ============================================================================
// ERRORES - Taxonomía de fallos de los servicios HTTP
// ============================================================================

use thiserror::Error;

/// Errores devueltos por `ApiClient` y `GeoService`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field '{field}' in response for {ip}")]
    MissingField { ip: String, field: &'static str },

    #[error("No coordinates for {ip}")]
    MissingCoordinates { ip: String },

    #[error("Lookup rejected for {ip}")]
    Lookup { ip: String },

    #[error("{ip} is not a public address")]
    PrivateAddress { ip: String },
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }

    /// Fallos por dirección concreta: se saltan en lote, no abortan
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::MissingCoordinates { .. } | Self::Lookup { .. } | Self::PrivateAddress { .. }
        )
    }
}
