//! Domain layer: pure types and rules, no transport dependencies.

pub mod foundation;
pub mod post;
