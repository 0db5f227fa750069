//! URL canonicalizers.
//!
//! A canonicalizer rewrites a parsed [`UrlComponents`] in place so that
//! equivalent URLs end up identical. Two rule sets are provided,
//! [`GoogleCanonicalizer`] and [`IaCanonicalizer`], and
//! [`DefaultIaCanonicalizer`] runs one after the other.

mod google;
mod ia;

pub use google::GoogleCanonicalizer;
pub use ia::IaCanonicalizer;

use crate::options::CanonicalizeOptions;
use crate::resolver::{NumericResolver, Resolver};
use crate::url_components::UrlComponents;

/// A pass over a parsed URL.
///
/// Implementations must not fail: anything they cannot make sense of is
/// left as it is. Options a canonicalizer has no step for are ignored.
pub trait Canonicalizer {
    fn canonicalize(&self, url: &mut UrlComponents, options: &CanonicalizeOptions);
}

impl<F> Canonicalizer for F
where
    F: Fn(&mut UrlComponents, &CanonicalizeOptions),
{
    fn canonicalize(&self, url: &mut UrlComponents, options: &CanonicalizeOptions) {
        self(url, options);
    }
}

/// Search-engine rules followed by the archive rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIaCanonicalizer<R = NumericResolver> {
    google: GoogleCanonicalizer<R>,
    ia: IaCanonicalizer,
}

impl DefaultIaCanonicalizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Resolver> DefaultIaCanonicalizer<R> {
    /// Use `resolver` for address-shaped hosts
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            google: GoogleCanonicalizer::with_resolver(resolver),
            ia: IaCanonicalizer,
        }
    }
}

impl<R: Resolver> Canonicalizer for DefaultIaCanonicalizer<R> {
    fn canonicalize(&self, url: &mut UrlComponents, options: &CanonicalizeOptions) {
        self.google.canonicalize(url, options);
        self.ia.canonicalize(url, options);
    }
}

/// Leaves the URL untouched. Formatting with it yields the key of the
/// parsed input as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Canonicalizer for Identity {
    fn canonicalize(&self, _url: &mut UrlComponents, _options: &CanonicalizeOptions) {}
}

/// Runs a list of canonicalizers in order.
#[derive(Default)]
pub struct Composite {
    children: Vec<Box<dyn Canonicalizer>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass to the end of the list
    #[must_use]
    pub fn with(mut self, child: impl Canonicalizer + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn push(&mut self, child: Box<dyn Canonicalizer>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl core::fmt::Debug for Composite {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Composite")
            .field("children", &self.children.len())
            .finish()
    }
}

impl Canonicalizer for Composite {
    fn canonicalize(&self, url: &mut UrlComponents, options: &CanonicalizeOptions) {
        for child in &self.children {
            child.canonicalize(url, options);
        }
    }
}
