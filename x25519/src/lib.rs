#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "std")]
extern crate std;

pub mod ecdh;

mod error;
mod public_key;
mod secret;
mod shared_secret;

pub use curve25519;
pub use rand_core;
pub use zeroize;

pub use crate::{
    error::Error,
    public_key::PublicKey,
    secret::{EphemeralSecret, Secret},
    shared_secret::SharedSecret,
};

use curve25519::{MontgomeryPoint, MontgomeryScalar};

/// Size in bytes of a private key.
pub const PRV_KEY_SIZE: usize = curve25519::SCALAR_SIZE;

/// Size in bytes of a public key.
pub const PUB_KEY_SIZE: usize = curve25519::POINT_SIZE;

/// Size in bytes of a shared secret.
pub const SHARED_SECRET_SIZE: usize = curve25519::POINT_SIZE;

/// The u-coordinate of the RFC 7748 base point, `u = 9`.
pub const X25519_BASEPOINT_BYTES: [u8; PUB_KEY_SIZE] = MontgomeryPoint::GENERATOR.0;

/// The X25519 function of RFC 7748, rejecting degenerate peer points.
///
/// Returns [`Error::InvalidPeerKey`] instead of computing with a low-order
/// point or a point on the twist, so the output is never all zeros.
pub fn x25519(
    scalar_bytes: [u8; PRV_KEY_SIZE],
    point_bytes: [u8; PUB_KEY_SIZE],
) -> Result<[u8; SHARED_SECRET_SIZE], Error> {
    let secret = Secret::from(scalar_bytes);
    let shared = secret.diffie_hellman(&PublicKey::from(point_bytes))?;
    Ok(shared.to_bytes())
}

/// An unchecked version of the X25519 function defined in RFC 7748.
/// No checks are made on the point.
pub fn x25519_unchecked(
    scalar_bytes: [u8; PRV_KEY_SIZE],
    point_bytes: [u8; PUB_KEY_SIZE],
) -> [u8; SHARED_SECRET_SIZE] {
    let scalar = MontgomeryScalar::from_bytes_clamped(scalar_bytes);
    (&MontgomeryPoint(point_bytes) * &scalar).to_bytes()
}
