//! Domain layer for the Zevility plugin.
//!
//! This module contains the core domain types and business logic for the
//! plugin, independent of Zellij-specific APIs or infrastructure concerns:
//! the evility record itself and the filter criteria applied to it.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`evility`]: Evility record model
//! - [`filter`]: Filter criteria and matching predicates
//!
//! # Examples
//!
//! ```
//! use zevility::domain::{Evility, FilterSet};
//!
//! fn visible(list: &[Evility], filters: &FilterSet) -> Vec<Evility> {
//!     list.iter().filter(|e| filters.passes(e)).cloned().collect()
//! }
//! ```

pub mod error;
pub mod evility;
pub mod filter;

pub use error::{Result, ZevilityError};
pub use evility::Evility;
pub use filter::{FilterSet, FilterToggle, SearchField, SearchFields};
