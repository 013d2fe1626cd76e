//! CLI crate for the lexord dictionary re-encoder.

pub mod cli;
pub mod encode;
