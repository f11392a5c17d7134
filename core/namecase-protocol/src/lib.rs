//! Cases, genders, name parts and the records a declension run produces.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod grammar;
pub mod ids;
pub mod model;

pub use grammar::*;
pub use ids::RuleId;
pub use model::*;
