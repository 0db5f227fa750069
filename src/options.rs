//! Typed configuration for canonicalization and key formatting.

use crate::format::Format;

/// Switches for the archive canonicalization steps.
///
/// Every step is on by default except `path_strip_empty`. Steps a
/// canonicalizer does not implement are ignored by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CanonicalizeOptions {
    pub host_lowercase: bool,
    /// Strip a leading `www.` / `www<digits>.` label
    pub host_massage: bool,
    /// Drop user and password
    pub auth_strip_user: bool,
    /// Drop the password; only consulted when the user is kept
    pub auth_strip_pass: bool,
    pub port_strip_default: bool,
    /// Turn a bare `/` path into no path at all
    pub path_strip_empty: bool,
    pub path_lowercase: bool,
    pub path_strip_session_id: bool,
    /// Remove a trailing `/` from any path longer than `/`
    pub path_strip_trailing_slash_unless_empty: bool,
    pub query_lowercase: bool,
    pub query_strip_session_id: bool,
    /// Treat an empty query, and a bare trailing `?`, as no query
    pub query_strip_empty: bool,
    pub query_alpha_reorder: bool,
    pub hash_strip: bool,
}

impl Default for CanonicalizeOptions {
    fn default() -> Self {
        Self {
            host_lowercase: true,
            host_massage: true,
            auth_strip_user: true,
            auth_strip_pass: true,
            port_strip_default: true,
            path_strip_empty: false,
            path_lowercase: true,
            path_strip_session_id: true,
            path_strip_trailing_slash_unless_empty: true,
            query_lowercase: true,
            query_strip_session_id: true,
            query_strip_empty: true,
            query_alpha_reorder: true,
            hash_strip: true,
        }
    }
}

macro_rules! builder {
    ($($(#[$doc:meta])* $name:ident => $field:ident;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(mut self, value: bool) -> Self {
                self.$field = value;
                self
            }
        )*
    };
}

impl CanonicalizeOptions {
    builder! {
        with_host_lowercase => host_lowercase;
        with_host_massage => host_massage;
        with_auth_strip_user => auth_strip_user;
        with_auth_strip_pass => auth_strip_pass;
        with_port_strip_default => port_strip_default;
        with_path_strip_empty => path_strip_empty;
        with_path_lowercase => path_lowercase;
        with_path_strip_session_id => path_strip_session_id;
        with_path_strip_trailing_slash_unless_empty => path_strip_trailing_slash_unless_empty;
        with_query_lowercase => query_lowercase;
        with_query_strip_session_id => query_strip_session_id;
        with_query_strip_empty => query_strip_empty;
        with_query_alpha_reorder => query_alpha_reorder;
        with_hash_strip => hash_strip;
    }
}

/// Switches for SURT key layout. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatOptions {
    /// Keep `scheme://(` in front of the key
    pub with_scheme: bool,
    /// Close the host with `,)` instead of `)`
    pub trailing_comma: bool,
    /// Reverse dotted-quad hosts like names
    pub reverse_ipaddr: bool,
    /// Reduce the host to its registered domain before reversing it
    pub public_suffix: bool,
}

impl FormatOptions {
    builder! {
        with_scheme => with_scheme;
        with_trailing_comma => trailing_comma;
        with_reverse_ipaddr => reverse_ipaddr;
        with_public_suffix => public_suffix;
    }
}

/// Everything the top-level `surt` entry point needs to know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurtOptions {
    pub canonicalize: CanonicalizeOptions,
    pub format: FormatOptions,
    pub format_kind: Format,
}

impl SurtOptions {
    #[must_use]
    pub fn with_canonicalize(mut self, canonicalize: CanonicalizeOptions) -> Self {
        self.canonicalize = canonicalize;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_format_kind(mut self, format_kind: Format) -> Self {
        self.format_kind = format_kind;
        self
    }

    #[must_use]
    pub fn with_scheme(mut self, value: bool) -> Self {
        self.format.with_scheme = value;
        self
    }

    #[must_use]
    pub fn with_trailing_comma(mut self, value: bool) -> Self {
        self.format.trailing_comma = value;
        self
    }

    #[must_use]
    pub fn with_reverse_ipaddr(mut self, value: bool) -> Self {
        self.format.reverse_ipaddr = value;
        self
    }

    #[must_use]
    pub fn with_public_suffix(mut self, value: bool) -> Self {
        self.format.public_suffix = value;
        self
    }

    #[must_use]
    pub fn with_host_massage(mut self, value: bool) -> Self {
        self.canonicalize.host_massage = value;
        self
    }

    #[must_use]
    pub fn with_query_alpha_reorder(mut self, value: bool) -> Self {
        self.canonicalize.query_alpha_reorder = value;
        self
    }
}
