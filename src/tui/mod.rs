//! Interactive playground programs.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: models and events (pure data)
//! - `update`: message handling (pure transitions)
//! - `view`: frame rendering (pure)
//! - `run`: terminal, threads and command interpretation (effects)

pub mod run;
pub mod state;
pub mod update;
pub mod view;

pub use run::run;
pub use state::{ListDemo, Playground};
