//! Public API surface: the [`GradientWarper`] builder and unified error type.

mod builder;
mod error;

pub use builder::GradientWarper;
pub use error::WarpError;
