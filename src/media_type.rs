//! Media type parsing and formatting.
//!
//! Implements RFC 6838 `type/subtype+suffix` handling. Parameter lists such
//! as `; charset=utf-8` are not part of this grammar.

use crate::error::{Error, Result};
use crate::grammar::{
    is_media_type, is_subtype_name, is_suffix_name, is_type_name, split_media_type,
};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A media type split into its components.
///
/// Values produced by [`parse`] are always lower-case. Values passed to
/// [`format`] are written out as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaType {
    /// Top-level type name, e.g. `text` or `image`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_: String,

    /// Subtype name without the suffix, e.g. `html` or `svg`.
    pub subtype: String,

    /// Structured syntax suffix, e.g. `xml` in `svg+xml`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub suffix: Option<String>,
}

impl MediaType {
    /// Creates a media type without a suffix.
    pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            subtype: subtype.into(),
            suffix: None,
        }
    }

    /// Sets the structured syntax suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Validates the components and formats them, see [`format`].
    pub fn to_formatted(&self) -> Result<String> {
        format(self)
    }

    fn suffix_str(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }
}

/// Writes `type/subtype[+suffix]` without validating the components.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        if let Some(suffix) = self.suffix_str() {
            write!(f, "+{}", suffix)?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<&str> for MediaType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Serializes a media type as `type/subtype`, with `+suffix` appended when a
/// non-empty suffix is present.
///
/// Components are checked against the RFC 6838 grammar in order: type,
/// subtype, then suffix. No case conversion is applied.
///
/// # Examples
///
/// ```
/// use media_typer::{format, MediaType};
///
/// let formatted = format(&MediaType::new("image", "svg").with_suffix("xml")).unwrap();
/// assert_eq!(formatted, "image/svg+xml");
/// ```
pub fn format(media_type: &MediaType) -> Result<String> {
    if !is_type_name(&media_type.type_) {
        trace!(type_ = %media_type.type_, "rejected media type name");
        return Err(Error::InvalidType);
    }

    if !is_subtype_name(&media_type.subtype) {
        trace!(subtype = %media_type.subtype, "rejected media subtype name");
        return Err(Error::InvalidSubtype);
    }

    if let Some(suffix) = media_type.suffix_str() {
        if !is_suffix_name(suffix) {
            trace!(suffix = %suffix, "rejected media type suffix");
            return Err(Error::InvalidSuffix);
        }
    }

    Ok(media_type.to_string())
}

/// Parses a media type into its components.
///
/// The input is lower-cased before matching. Surrounding spaces are allowed.
/// A suffix is split off at the last `+` of the subtype.
///
/// # Examples
///
/// ```
/// use media_typer::parse;
///
/// let media_type = parse("IMAGE/SVG+XML").unwrap();
/// assert_eq!(media_type.type_, "image");
/// assert_eq!(media_type.subtype, "svg");
/// assert_eq!(media_type.suffix.as_deref(), Some("xml"));
/// ```
pub fn parse(s: &str) -> Result<MediaType> {
    if s.is_empty() {
        return Err(Error::ArgumentRequired("string"));
    }

    let lower = s.to_lowercase();
    let (type_, subtype) = match split_media_type(&lower) {
        Some(parts) => parts,
        None => {
            trace!(input = %s, "rejected media type");
            return Err(Error::InvalidMediaType);
        }
    };

    let (subtype, suffix) = match subtype.rsplit_once('+') {
        Some((subtype, suffix)) => (subtype, Some(suffix.to_string())),
        None => (subtype, None),
    };

    Ok(MediaType {
        type_: type_.to_string(),
        subtype: subtype.to_string(),
        suffix,
    })
}

/// Reports whether the string is a syntactically valid media type.
///
/// Only an empty argument is an error; malformed input yields `Ok(false)`.
///
/// # Examples
///
/// ```
/// use media_typer::test;
///
/// assert!(test("text/html").unwrap());
/// assert!(!test("text/;plain").unwrap());
/// assert!(test("").is_err());
/// ```
pub fn test(s: &str) -> Result<bool> {
    if s.is_empty() {
        return Err(Error::ArgumentRequired("string"));
    }

    Ok(is_media_type(&s.to_lowercase()))
}
