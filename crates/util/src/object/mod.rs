//! Record helpers: deep merging, deep get/set, inversion and shape checks.

mod assign_deep;
mod copy;
mod deep_path;
mod has_own_property;
mod invert;
mod is_empty;
mod shape;

pub use assign_deep::{assign_deep, assign_deep_exists, assign_deep_with_array};
pub use copy::copy;
pub use deep_path::{get_deep, set_deep, PathError};
pub use has_own_property::has_own_property;
pub use invert::{invert, invert_by, to_js_string};
pub use is_empty::is_empty;
pub use shape::{is_plain, Shape};
