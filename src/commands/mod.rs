//! # CLI Command Implementations
//!
//! Each subcommand of `ppa` lives in its own file with:
//! - An `Args` struct derived with `clap`.
//! - An `execute` function that calls into the `ppa_utils` library and
//!   prints the result.
//!
//! Library errors are passed through `suggestions::explain` so the user
//! sees a hint next to the failure.

pub mod completions;
pub mod install;
pub mod list;
pub mod remove;
