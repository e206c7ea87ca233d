//! Requirement checking.
//!
//! One evaluation pass over the configured requirements produces a
//! [`CheckReport`] with a pass/fail entry per item. All requirements are
//! always evaluated; nothing short-circuits.

pub mod checker;
pub mod status;

pub use checker::{startup_check, RequirementChecker};
pub use status::{CheckReport, CheckResult};
