//! RFC 6838 media type parsing, validation and formatting.
//!
//! This crate handles the `type/subtype+suffix` tokens used in content
//! negotiation headers:
//! - [`parse`] splits a string into a [`MediaType`], lower-casing it
//! - [`format`] validates a [`MediaType`] and writes it out
//! - [`test`] reports whether a string is a valid media type
//!
//! All operations are pure and synchronous.
//!
//! # Examples
//!
//! ```
//! use media_typer::{format, parse, test, MediaType};
//!
//! let media_type = parse("image/svg+xml").unwrap();
//! assert_eq!(media_type, MediaType::new("image", "svg").with_suffix("xml"));
//! assert_eq!(format(&media_type).unwrap(), "image/svg+xml");
//! assert!(test("text/html").unwrap());
//! ```

pub mod error;
pub mod grammar;
pub mod media_type;

// Re-export commonly used types
pub use error::{Error, Result};
pub use media_type::{format, parse, test, MediaType};
