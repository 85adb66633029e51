//! Theme: color palette and global page styles.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
