/// Display policies for rendered nodes
pub mod style;

pub use style::{tier_accent, ColorStyle, FontStyle, NodeStyle, StyleOverlay};
