//! # Lifecycle Testing Harness
//!
//! A reusable harness for driving the proposal lifecycle workflow end to
//! end against the reference governor and value-store collaborators.
//!
//! ## Architecture
//!
//! ```text
//! test/framework/
//! ├── mod.rs       — re-exports
//! ├── clock.rs     — Clock capability (steppable vs. host time)
//! └── scenario.rs  — LifecycleScenario: wiring + full-sequence driver
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use test_framework::{default_governor_params, LedgerClock, LifecycleScenario};
//!
//! let scenario = LifecycleScenario::new(&default_governor_params());
//! let clock = LedgerClock::new(&scenario.env);
//! let report = scenario.run_to_execution(&clock, 5, "Proposal #1: Store 5!");
//! assert_eq!(report.stored_value, 5);
//! ```

extern crate std;


pub use clock::{Clock, HostClock, LedgerClock};
pub use scenario::{default_governor_params, LifecycleReport, LifecycleScenario};
