use crate::{EphemeralSecret, Error, PUB_KEY_SIZE, Secret};
use core::hash::{Hash, Hasher};
use curve25519::MontgomeryPoint;
use subtle::{Choice, ConstantTimeEq};

/// A PublicKey is the u-coordinate of a point on Curve25519.
///
/// Keys built with [`PublicKey::from_bytes`] are known to be on the curve and
/// of large order. [`Secret::diffie_hellman`] checks again either way, so
/// unchecked keys cannot produce a degenerate shared secret.
#[derive(Copy, Clone, Debug)]
pub struct PublicKey(pub(crate) MontgomeryPoint);

impl PublicKey {
    /// Converts a byte slice into a public key.
    ///
    /// Returns an error if:
    /// - the length of the slice is not 32 ([`Error::InvalidLength`])
    /// - the point is low order or lies on the twist ([`Error::InvalidPeerKey`])
    pub fn from_bytes(bytes: &[u8]) -> Result<PublicKey, Error> {
        let public_key = PublicKey::from_bytes_unchecked(bytes)?;
        if !bool::from(public_key.is_valid()) {
            return Err(Error::InvalidPeerKey);
        }
        Ok(public_key)
    }

    /// Converts a byte slice into a public key without checking the point.
    ///
    /// Only the length is checked.
    pub fn from_bytes_unchecked(bytes: &[u8]) -> Result<PublicKey, Error> {
        let array = <[u8; PUB_KEY_SIZE]>::try_from(bytes).map_err(|_| Error::InvalidLength)?;
        Ok(PublicKey(MontgomeryPoint(array)))
    }

    /// Whether the key is a large-order point on Curve25519.
    pub fn is_valid(&self) -> Choice {
        self.0.is_on_curve() & !self.0.is_low_order()
    }

    /// View the public key as a byte array
    pub fn as_bytes(&self) -> &[u8; PUB_KEY_SIZE] {
        self.0.as_bytes()
    }

    /// Copy the public key out as a byte array
    pub fn to_bytes(&self) -> [u8; PUB_KEY_SIZE] {
        self.0.to_bytes()
    }
}

/// No validation happens here; see [`PublicKey::from_bytes`].
impl From<[u8; PUB_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUB_KEY_SIZE]) -> PublicKey {
        PublicKey(MontgomeryPoint(bytes))
    }
}

/// Given a secret key, compute the corresponding public key
/// using the generator specified in RFC 7748.
impl From<&Secret> for PublicKey {
    fn from(secret: &Secret) -> PublicKey {
        PublicKey(MontgomeryPoint::mul_base(&secret.as_scalar()))
    }
}

impl From<&EphemeralSecret> for PublicKey {
    fn from(secret: &EphemeralSecret) -> PublicKey {
        PublicKey(MontgomeryPoint::mul_base(&secret.as_scalar()))
    }
}

impl From<PublicKey> for [u8; PUB_KEY_SIZE] {
    fn from(public_key: PublicKey) -> [u8; PUB_KEY_SIZE] {
        public_key.to_bytes()
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PublicKey {}

impl Hash for PublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for PublicKey {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(self.as_bytes(), s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for PublicKey {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let mut buffer = [0u8; PUB_KEY_SIZE];
        serdect::array::deserialize_hex_or_bin(&mut buffer, d)?;
        PublicKey::from_bytes(&buffer).map_err(<D::Error as serdect::serde::de::Error>::custom)
    }
}
