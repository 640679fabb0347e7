pub mod errors;
pub mod export;
pub mod search;

pub use errors::{DownloadError, ExportError, SearchError, TransportError};
pub use export::{ExportStatus, ExportTrigger};
pub use search::SearchController;
