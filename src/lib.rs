//! Sort-friendly URI Reordering Transform (SURT) keys and URL
//! canonicalization for web archives.
//!
//! ```
//! assert_eq!(surt::surt("http://www.archive.org/goo/?a=2&b&a=1"), "org,archive)/goo?a=1&a=2&b");
//! ```

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod scheme;
mod surt;
mod types;
mod url_components;

// Building blocks, public for custom pipelines
pub mod canonicalizer;
pub mod format;
pub mod host;
pub mod ipv4;
pub mod options;
pub mod parser;
pub mod path;
pub mod public_suffix;
pub mod query_params;
pub mod resolver;
pub mod unicode;

// Public API
pub use canonicalizer::{
    Canonicalizer, Composite, DefaultIaCanonicalizer, GoogleCanonicalizer, IaCanonicalizer,
    Identity,
};
pub use error::{ParseError, Result};
pub use format::Format;
pub use options::{CanonicalizeOptions, FormatOptions, SurtOptions};
pub use public_suffix::{PslLookup, SuffixLookup, SuffixSplit};
pub use resolver::{NumericResolver, Resolver, SystemResolver};
pub use surt::{EMPTY_KEY, canonicalize_url, surt, surt_with, try_surt_with};
pub use types::SchemeType;
pub use url_components::UrlComponents;
