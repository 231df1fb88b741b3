//! URL query and base64 data URI helpers.

mod data_uri;
mod params;
mod uri_component;

pub use data_uri::{base64_pre, to_data_uri, DataUriKind, DataUriKindError};
pub use params::{computed_url_params, get_url_params};
pub use uri_component::{decode_uri_component, encode_uri_component, UriError};
