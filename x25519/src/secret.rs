use crate::{Error, PRV_KEY_SIZE, PublicKey, SharedSecret};
use core::fmt;
use curve25519::MontgomeryScalar;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// A Secret is a clamped Curve25519 scalar.
///
/// It can be used for any number of key exchanges. Use [`EphemeralSecret`]
/// when a key should only ever take part in one.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret([u8; PRV_KEY_SIZE]);

/// Computes a Scalar according to RFC 7748 given a byte array of length 32.
impl From<[u8; PRV_KEY_SIZE]> for Secret {
    fn from(bytes: [u8; PRV_KEY_SIZE]) -> Secret {
        Secret(MontgomeryScalar::clamp_integer(bytes))
    }
}

impl Secret {
    /// Generate a `Secret` from a cryptographically secure RNG.
    pub fn random(csprng: &mut impl CryptoRngCore) -> Self {
        let mut bytes = [0u8; PRV_KEY_SIZE];
        csprng.fill_bytes(&mut bytes);

        let secret = Secret::from(bytes);
        bytes.zeroize();
        secret
    }

    /// Generate a `Secret` from the operating system's RNG.
    #[cfg(feature = "getrandom")]
    pub fn generate() -> Self {
        Self::random(&mut OsRng)
    }

    /// Converts a byte slice into a secret and clamps it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Secret, Error> {
        let array = <[u8; PRV_KEY_SIZE]>::try_from(bytes).map_err(|_| Error::InvalidLength)?;
        Ok(Secret::from(array))
    }

    /// The public key belonging to this secret.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self)
    }

    /// Performs a Diffie-Hellman key exchange between the secret key and an
    /// external public key.
    ///
    /// Fails with [`Error::InvalidPeerKey`] if the peer's key is low order
    /// or not on Curve25519, whether or not it was checked on decode.
    pub fn diffie_hellman(&self, public_key: &PublicKey) -> Result<SharedSecret, Error> {
        SharedSecret::compute(&self.as_scalar(), public_key)
    }

    /// The clamped secret bytes.
    pub fn as_bytes(&self) -> &[u8; PRV_KEY_SIZE] {
        &self.0
    }

    pub(crate) fn as_scalar(&self) -> MontgomeryScalar {
        MontgomeryScalar::from_bytes_clamped(self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret").finish_non_exhaustive()
    }
}

/// A secret that can take part in a single key exchange.
///
/// [`EphemeralSecret::diffie_hellman`] takes `self` by value, and the type
/// is not `Clone`, so the scalar is wiped as soon as the exchange is done.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EphemeralSecret(Secret);

impl EphemeralSecret {
    /// Generate an `EphemeralSecret` from a cryptographically secure RNG.
    pub fn random(csprng: &mut impl CryptoRngCore) -> Self {
        Self(Secret::random(csprng))
    }

    /// Generate an `EphemeralSecret` from the operating system's RNG.
    #[cfg(feature = "getrandom")]
    pub fn generate() -> Self {
        Self::random(&mut OsRng)
    }

    /// The public key belonging to this secret.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self)
    }

    /// Consume the secret in a Diffie-Hellman key exchange.
    pub fn diffie_hellman(self, public_key: &PublicKey) -> Result<SharedSecret, Error> {
        self.0.diffie_hellman(public_key)
    }

    pub(crate) fn as_scalar(&self) -> MontgomeryScalar {
        self.0.as_scalar()
    }
}

impl fmt::Debug for EphemeralSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EphemeralSecret").finish_non_exhaustive()
    }
}
