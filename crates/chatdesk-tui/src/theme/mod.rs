//! Dashboard theme: color palette and style builders

pub mod palette;
pub mod styles;
