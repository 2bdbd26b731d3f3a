//! The Airy equation `y'' = t·y`, integrated from Airy-function initial
//! conditions.
//!
//! Reduced to first order with `u1 = y` and `u2 = y'`, the system is
//!
//! ```text
//! u1' = u2
//! u2' = t·u1
//! ```
//!
//! Starting from `(Ai(t0), Ai'(t0))`, the exact solution is `Ai(t)`, which
//! makes the run easy to check.
//!
//! - [`system`] — the right-hand side
//! - [`special`] — `Ai(x)` and `Ai'(x)` for real `x`
//! - [`config`] — run configuration from TOML and command-line overrides
//! - [`run`] — wires the system, integrator, driver, and printer together

pub mod config;
pub mod special;
pub mod system;

mod run;

pub use config::{ConfigError, MethodName, RunConfig};
pub use run::{RunError, run};
pub use system::AiryEquation;
