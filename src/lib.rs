//! WarpGrad CLI support library.
//!
//! The binary is a thin shell around the `warp-gradient` crate. This
//! library exposes the input-parsing module for integration testing.

pub mod input;
