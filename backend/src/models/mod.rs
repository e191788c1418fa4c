//! Domain types consumed by the grid.
//!
//! These are the data contracts the surrounding dashboard hands over: the
//! calendar window, per-property rate records and the comparison set with its
//! lowest/highest designations.

pub mod macros;

pub mod calendar;
pub mod property;
pub mod rates;

pub use calendar::*;
pub use property::*;
pub use rates::*;
