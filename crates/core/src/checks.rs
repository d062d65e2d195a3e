//! # Validation Checks
//!
//! This module contains the individual rules that are applied to a pull
//! request title.
//!
//! The checks are organized into submodules:
//! - `pattern`: Validates the title against the configured regular expression
//! - `length`: Validates the title against the configured length bounds
//! - `prefix`: Validates the title against the allowed and disallowed prefixes
//!
//! These checks are used by [`TitleGate`](crate::TitleGate) to determine if
//! a pull request title satisfies the configured policy.

pub mod length;
pub mod pattern;
pub mod prefix;
