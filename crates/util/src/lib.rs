//! handy-util - Small stateless helpers for sequences, records, strings and URLs.
//!
//! Records and other dynamic values are `serde_json::Value`s; sequences are
//! plain slices. Nothing here keeps state between calls. The functions that
//! mutate an argument say so: [`array::remove_of`] and the `assign_deep*`
//! family.
//!
//! # Example
//!
//! ```
//! use handy_util::{assign_deep, get_deep, uniq};
//! use serde_json::json;
//!
//! let mut config = json!({"server": {"port": 80, "host": "localhost"}});
//! assign_deep(&mut config, [&json!({"server": {"port": 8080}})]);
//! assert_eq!(get_deep(&config, &["server", "port"]), Some(&json!(8080)));
//!
//! assert_eq!(uniq(&[3, 1, 3]), vec![3, 1]);
//! ```

pub mod array;
pub mod object;
pub mod strings;
pub mod url;

// Re-exports for convenience
pub use array::{last, remove_of, uniq, uniq_by, uniq_by_key};
pub use object::{
    assign_deep, assign_deep_exists, assign_deep_with_array, copy, get_deep, has_own_property,
    invert, invert_by, is_empty, is_plain, set_deep, to_js_string, PathError, Shape,
};
pub use strings::{include_double_byte, length, length_with, trim, uppercase_first_letter, TrimDirection};
pub use url::{
    base64_pre, computed_url_params, decode_uri_component, encode_uri_component, get_url_params,
    to_data_uri, DataUriKind, UriError,
};
