//! Pure rendering of lookup outcomes into a typed element tree.

pub mod format;
pub mod node;
pub mod results;

pub use node::{Element, Node};
pub use results::{error_banner, loading_overlay, no_results, results_listing};
