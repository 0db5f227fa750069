/// URL scheme types that canonicalization treats differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    #[default]
    Http,
    Https,
    /// `dns:` carries a bare host and is never written with `//`
    Dns,
    NotSpecial,
}

impl SchemeType {
    /// Get the well-known port for this scheme.
    ///
    /// Only `http` and `https` have one; every other scheme reports `None`
    /// so that no explicit port is ever considered redundant.
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http => Some(80),
            Self::Https => Some(443),
            Self::Dns | Self::NotSpecial => None,
        }
    }
}
