//! Command implementations for the tlh-translit CLI
//!
//! Each command module handles the CLI interface and delegates to
//! tlh-translit for the reconstruction itself.

pub mod reconstruct;
pub mod tags;
pub mod word;
