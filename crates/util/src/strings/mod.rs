//! String utilities.
//!
//! Provides width accounting for double-byte text, pattern-based trimming and
//! capitalization.

mod case;
mod trim;
mod width;

pub use case::uppercase_first_letter;
pub use trim::{trim, TrimDirection};
pub use width::{include_double_byte, length, length_with, DEFAULT_WIDE_BYTES};
