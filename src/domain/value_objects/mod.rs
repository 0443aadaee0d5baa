//! Value Objects
//!
//! Immutable value types shared by the domain entities.

mod date_range;

pub use date_range::DateRange;
