use std::str::FromStr;

use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataUriKindError {
    #[error("unsupported data URI type: {0}")]
    Unsupported(String),
}

/// Payload types with a known base64 data URI prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataUriKind {
    Png,
    Jpg,
    Pdf,
}

impl DataUriKind {
    pub fn prefix(self) -> &'static str {
        match self {
            DataUriKind::Png => "data:image/png;base64,",
            DataUriKind::Jpg => "data:image/jpg;base64,",
            DataUriKind::Pdf => "data:application/pdf;base64,",
        }
    }
}

impl FromStr for DataUriKind {
    type Err = DataUriKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(DataUriKind::Png),
            "jpg" => Ok(DataUriKind::Jpg),
            "pdf" => Ok(DataUriKind::Pdf),
            other => Err(DataUriKindError::Unsupported(other.to_string())),
        }
    }
}

/// Base64 data URI prefix for `png`, `jpg` or `pdf`; `None` for anything else.
///
/// # Examples
///
/// ```
/// use handy_util::url::base64_pre;
///
/// assert_eq!(base64_pre("png"), Some("data:image/png;base64,"));
/// assert_eq!(base64_pre("gif"), None);
/// ```
pub fn base64_pre(kind: &str) -> Option<&'static str> {
    kind.parse::<DataUriKind>().ok().map(DataUriKind::prefix)
}

/// Build a complete data URI: the prefix followed by standard base64 of `data`.
///
/// # Examples
///
/// ```
/// use handy_util::url::{to_data_uri, DataUriKind};
///
/// assert_eq!(to_data_uri(DataUriKind::Pdf, b"hi"), "data:application/pdf;base64,aGk=");
/// ```
pub fn to_data_uri(kind: DataUriKind, data: &[u8]) -> String {
    let body = base64::engine::general_purpose::STANDARD.encode(data);
    format!("{}{}", kind.prefix(), body)
}
