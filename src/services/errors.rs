use thiserror::Error;

/// The request did not complete with an HTTP response we could use.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

/// Why a search did not produce a customer listing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Non-success lookup response; carries the message shown to the user.
    #[error("{0}")]
    Lookup(String),

    #[error("No se encontraron clientes")]
    NoResults,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// The page could not push a file to the user's file system.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DownloadError {
    /// The host refused or failed one of the download steps.
    #[error("{0}")]
    Browser(String),
}

/// Why an export did not reach the user's file system.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Export request failed with status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),
}
