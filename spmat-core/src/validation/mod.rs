//! Line and coordinate validation for the coordinate-list format
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::validate_coordinate;
pub use parsing::{is_blank, parse_entry, parse_header};
