//! Portfolio Core Library
//!
//! Content catalog and view-state logic for the portfolio page, kept free of
//! any UI dependency so it can be tested headlessly.
//!
//! ## Overview
//!
//! Three pieces make up the core:
//!
//! - **Catalog**: the owner profile, skills grid, and project records the
//!   page renders. Built-in by default, replaceable by a JSON file.
//! - **Star field**: randomized decorative background descriptors, generated
//!   exactly once per page load.
//! - **Modal controller**: one open/closed state machine per project card,
//!   with event containment on the detail panel.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Activation, Catalog, ModalState};
//!
//! let catalog = Catalog::builtin();
//! let mut modal = ModalState::new();
//!
//! modal.activate(Activation::Card);
//! let detail = modal.detail(&catalog.projects[0]).unwrap();
//! assert_eq!(detail.title, catalog.projects[0].title);
//! ```

pub mod catalog;
pub mod error;
pub mod modal;
pub mod starfield;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use error::{PortfolioError, PortfolioResult};
pub use modal::{Activation, ModalState, ProjectDetail};
pub use starfield::{StarDescriptor, STAR_COUNT};
pub use types::{Profile, ProjectRecord, Skill, SkillGroup};
