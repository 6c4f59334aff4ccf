//! URL template matching with named placeholders, inline regex constraints
//! and wildcard tails.
//!
//! A template is a path string mixing literal text with placeholders:
//! `<name>` captures one segment-free run of characters, `<name:regex>`
//! captures exactly what the inline constraint allows, and a trailing `*`
//! accepts the rest of the URL without capturing it. Matching is always
//! whole-string.
//!
//! ```
//! use urlmatch::match_url;
//!
//! let params = match_url("/users/<name>.<suffix>", "/users/detail.json")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(params.get("name"), Some("detail"));
//! assert_eq!(params.get("suffix"), Some("json"));
//!
//! // no match is None, not an error
//! assert_eq!(match_url("/users/<id:\\d{2}>", "/users/123").unwrap(), None);
//! ```
//!
//! Templates are usually static route definitions reused across many
//! requests; [`TemplateCache`] keeps compiled templates around so only the
//! first call per template pays for compilation.

pub mod cache;
pub mod error;
pub mod params;
pub mod template;

pub use cache::TemplateCache;
pub use error::{MatchError, MatchResult};
pub use params::MatchParams;
pub use template::{match_url, UrlTemplate};
