use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::error::Error as StdError;

/// Key exchange errors
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The peer's public key is a low-order point or lies on the twist
    InvalidPeerKey,
    /// A key was decoded from a slice of the wrong length
    InvalidLength,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPeerKey => write!(f, "peer public key is invalid"),
            Error::InvalidLength => write!(f, "key length is invalid"),
        }
    }
}

#[cfg(feature = "std")]
impl StdError for Error {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn display() {
        assert_eq!(Error::InvalidPeerKey.to_string(), "peer public key is invalid");
        assert_eq!(Error::InvalidLength.to_string(), "key length is invalid");
    }
}
