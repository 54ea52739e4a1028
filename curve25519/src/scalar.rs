use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Curve25519 scalar in the clamped form X25519 multiplies by.
///
/// Clamping clears the three low bits (the scalar is a multiple of the
/// cofactor 8), clears bit 255 and sets bit 254, so every scalar has the same
/// bit length and the ladder always runs the same number of steps.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MontgomeryScalar([u8; 32]);

impl MontgomeryScalar {
    /// Number of ladder steps: bits 254 down to 0.
    pub const BITS: usize = 255;

    /// Clamp `bytes` and wrap the result.
    pub fn from_bytes_clamped(bytes: [u8; 32]) -> Self {
        Self(Self::clamp_integer(bytes))
    }

    /// Apply the RFC 7748 `decodeScalar25519` bit pattern.
    pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
        bytes[0] &= 0b1111_1000;
        bytes[31] &= 0b0111_1111;
        bytes[31] |= 0b0100_0000;
        bytes
    }

    /// Whether `bytes` already carry the clamping bit pattern.
    pub const fn is_clamped(bytes: &[u8; 32]) -> bool {
        bytes[0] & 0b0000_0111 == 0 && bytes[31] & 0b1100_0000 == 0b0100_0000
    }

    /// The little-endian clamped scalar.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Bit `i` of the scalar as `0` or `1`.
    ///
    /// `i` is a public loop index, so the byte lookup does not depend on
    /// secret data.
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> u8 {
        (self.0[i >> 3] >> (i & 7)) & 1
    }
}

impl From<[u8; 32]> for MontgomeryScalar {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes_clamped(bytes)
    }
}

impl fmt::Debug for MontgomeryScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MontgomeryScalar").finish_non_exhaustive()
    }
}
