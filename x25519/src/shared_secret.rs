use crate::{Error, PublicKey, SHARED_SECRET_SIZE};
use core::fmt;
use curve25519::{MontgomeryPoint, MontgomeryScalar};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "hkdf")]
use {
    digest::{Digest, crypto_common::BlockSizeUser},
    hkdf::{Hkdf, hmac::SimpleHmac},
};

/// A SharedSecret is the u-coordinate produced by a Diffie-Hellman key
/// exchange.
///
/// The raw bytes are uniformly distributed over the points of the curve, not
/// over all bit strings, so they should be fed through a KDF (see
/// [`SharedSecret::extract`] with the `hkdf` feature) before use as a key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(MontgomeryPoint);

impl SharedSecret {
    /// Multiply a validated peer key by `scalar`.
    pub(crate) fn compute(
        scalar: &MontgomeryScalar,
        public_key: &PublicKey,
    ) -> Result<SharedSecret, Error> {
        // Public information: checking it leaks nothing about the scalar.
        if !bool::from(public_key.is_valid()) {
            return Err(Error::InvalidPeerKey);
        }
        Ok(SharedSecret(&public_key.0 * scalar))
    }

    /// View the shared secret as a byte array
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        self.0.as_bytes()
    }

    /// Copy the shared secret out as a byte array.
    ///
    /// The copy is not wiped on drop.
    pub fn to_bytes(&self) -> [u8; SHARED_SECRET_SIZE] {
        self.0.to_bytes()
    }

    /// The raw shared secret bytes.
    ///
    /// Prefer [`SharedSecret::extract`] over using these directly as a key.
    pub fn raw_secret_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        self.as_bytes()
    }

    /// Use [HKDF] (HMAC-based Extract-and-Expand Key Derivation Function) to
    /// extract entropy from this shared secret.
    ///
    /// The returned [`Hkdf`] can then be expanded into keys of any length.
    ///
    /// [HKDF]: https://en.wikipedia.org/wiki/HKDF
    #[cfg(feature = "hkdf")]
    pub fn extract<D>(&self, salt: Option<&[u8]>) -> Hkdf<D, SimpleHmac<D>>
    where
        D: BlockSizeUser + Clone + Digest,
    {
        Hkdf::new(salt, self.as_bytes())
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}
