use regex::Regex;

const WHITESPACE: &str = r"\s";

/// Which ends of a string [`trim`] cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimDirection {
    Left,
    Right,
    #[default]
    Both,
}

impl TrimDirection {
    /// `"l"` is left, `"r"` is right, anything else is both ends.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "l" => TrimDirection::Left,
            "r" => TrimDirection::Right,
            _ => TrimDirection::Both,
        }
    }

    fn pattern(self, fragment: &str) -> String {
        match self {
            TrimDirection::Left => format!("^{fragment}+"),
            TrimDirection::Right => format!("{fragment}+$"),
            TrimDirection::Both => format!("^{fragment}+|{fragment}+$"),
        }
    }
}

/// Cut runs of `chars` (whitespace when `None` or empty) from the ends of `s`.
///
/// `chars` is a regex fragment spliced in as-is, so a literal such as `"."`
/// has to be escaped by the caller (`r"\."`). When the resulting pattern does
/// not compile the input comes back unchanged.
///
/// # Examples
///
/// ```
/// use handy_util::strings::{trim, TrimDirection};
///
/// assert_eq!(trim("  hi  ", None, TrimDirection::Both), "hi");
/// assert_eq!(trim("--hi--", Some("-"), TrimDirection::Left), "hi--");
/// assert_eq!(trim("--hi--", Some("-"), TrimDirection::Right), "--hi");
/// ```
pub fn trim(s: &str, chars: Option<&str>, direction: TrimDirection) -> String {
    let fragment = chars.filter(|c| !c.is_empty()).unwrap_or(WHITESPACE);
    let pattern = direction.pattern(fragment);
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(err) => {
            tracing::debug!(%pattern, error = %err, "trim pattern does not compile");
            s.to_string()
        }
    }
}
