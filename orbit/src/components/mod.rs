// Component Library for Orbit
// Primitives resolve style props into classes; presets are built on the primitives

pub mod layout;
pub mod primitive;
pub mod typography;

pub use layout::*;
pub use primitive::*;
pub use typography::*;
