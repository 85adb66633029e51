//! Catalog context provider for the portfolio page.
//!
//! Provides the content catalog to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| catalog_signal);
//!
//! // In child components
//! let catalog = use_catalog();
//! ```

use dioxus::prelude::*;
use portfolio_core::Catalog;

/// Get the content catalog resolved at startup.
pub fn get_catalog() -> Catalog {
    crate::get_catalog()
}

/// Hook to access the content catalog from context.
///
/// Returns a Signal containing the catalog. The catalog never changes after
/// launch, so reads are cheap and re-renders are content-stable.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}
