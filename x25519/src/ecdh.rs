//! Fixed-size buffer interface to the key exchange.
//!
//! For callers that keep keys in plain byte arrays: the private key buffer is
//! clamped in place and reused as-is for every exchange.
//!
//! # Usage
//!
//! This usage example is from the perspective of two participants in the
//! exchange, nicknamed "Alice" and "Bob".
//!
//! ```
//! # fn main() -> Result<(), x25519::Error> {
//! use x25519::{PRV_KEY_SIZE, ecdh};
//!
//! // Alice fills her private key buffer with entropy
//! let mut alice_private = [0x11u8; PRV_KEY_SIZE];
//! let alice_public = ecdh::generate_keys(&mut alice_private);
//!
//! // Bob does the same
//! let mut bob_private = [0x22u8; PRV_KEY_SIZE];
//! let bob_public = ecdh::generate_keys(&mut bob_private);
//!
//! // Each side combines its own private key with the other's public key
//! let alice_shared = ecdh::shared_secret(&alice_private, &bob_public)?;
//! let bob_shared = ecdh::shared_secret(&bob_private, &alice_public)?;
//!
//! // Both participants arrive on the same shared secret
//! assert_eq!(alice_shared, bob_shared);
//! # Ok(())
//! # }
//! ```

use crate::{Error, PRV_KEY_SIZE, PUB_KEY_SIZE, PublicKey, SHARED_SECRET_SIZE, Secret};

/// Clamp `private_key` in place and return the matching public key.
///
/// The buffer should be filled with 32 bytes from a CSPRNG beforehand. Any
/// contents are accepted, and calling this again on the same buffer yields
/// the same public key.
pub fn generate_keys(private_key: &mut [u8; PRV_KEY_SIZE]) -> [u8; PUB_KEY_SIZE] {
    let secret = Secret::from(*private_key);
    private_key.copy_from_slice(secret.as_bytes());
    secret.public_key().to_bytes()
}

/// Compute the shared secret between `private_key` and a peer's
/// `public_key`.
///
/// The private key is clamped on a local copy first, so any 32 bytes work.
/// Fails with [`Error::InvalidPeerKey`] if the peer key is low order or not
/// on Curve25519.
pub fn shared_secret(
    private_key: &[u8; PRV_KEY_SIZE],
    public_key: &[u8; PUB_KEY_SIZE],
) -> Result<[u8; SHARED_SECRET_SIZE], Error> {
    let secret = Secret::from(*private_key);
    let shared = secret.diffie_hellman(&PublicKey::from(*public_key))?;
    Ok(shared.to_bytes())
}
