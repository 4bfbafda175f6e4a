/// Shared utilities used across all layers
pub mod error;
pub mod html;
pub mod result;
pub mod security;

pub use result::Result;
