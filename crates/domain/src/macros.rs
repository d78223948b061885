//! Macro for implementing Display and FromStr for wire-tag enums
//!
//! Calculator ids, navigation tabs and similar enums travel as short
//! lowercase tags (in URL paths, CLI arguments, JSON). This macro generates
//! both conversions from a single mapping.
//!
//! # Example
//!
//! ```rust
//! use numerolog_domain::impl_domain_tag_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Section {
//!     Matrix,
//!     Profile,
//! }
//!
//! impl_domain_tag_conversions!(Section {
//!     Matrix => "matrix",
//!     Profile => "profile",
//! });
//!
//! assert_eq!(Section::Matrix.to_string(), "matrix");
//! assert_eq!("PROFILE".parse::<Section>().unwrap(), Section::Profile);
//! ```

/// Implements Display and FromStr traits for tag enums
///
/// - Display writes the tag exactly as given
/// - FromStr parses case-insensitively and names the enum in its error
#[macro_export]
macro_rules! impl_domain_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
