//! Carrier selection.
//!
//! Precedence, highest first:
//! 1. The caller's `preferredProvider`, unless it is `Unknown`
//! 2. The configured default carrier for the line, if it names a known carrier
//! 3. The built-in rule table for the line
//! 4. Dyad

mod config;
mod selector;

pub use config::SelectionConfig;
pub use selector::{select, ProviderSelector};
