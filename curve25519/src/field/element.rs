//! Field element modulo `p = 2^255 - 19` using 64-bit limbs.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// `16 * p` spread over the limbs. Added before a subtraction so that no
/// limb can underflow for any weakly reduced subtrahend.
const SIXTEEN_P: [u64; 5] = [
    36028797018963664, // 16 * (2^51 - 19)
    36028797018963952, // 16 * (2^51 - 1)
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

/// An element of GF(2^255 - 19).
///
/// Stored as five little-endian 51-bit limbs,
/// `value = l0 + l1 * 2^51 + l2 * 2^102 + l3 * 2^153 + l4 * 2^204`.
/// Every operation leaves the limbs weakly reduced (each below 2^52), so any
/// sequence of operations can be chained without overflowing. The canonical
/// representative in `[0, p)` is only materialized by [`FieldElement::to_bytes`],
/// which is also what equality is defined on.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self([0, 0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0, 0]);

    /// `p - 1`.
    pub const MINUS_ONE: Self = Self([
        LOW_51_BIT_MASK - 19,
        LOW_51_BIT_MASK,
        LOW_51_BIT_MASK,
        LOW_51_BIT_MASK,
        LOW_51_BIT_MASK,
    ]);

    /// Coefficient `A` of the Montgomery curve `v^2 = u^3 + A u^2 + u`.
    pub const MONTGOMERY_A: Self = Self::from_u64(486662);

    /// `(A + 2) / 4`, the constant used by the ladder step.
    pub const A_PLUS_TWO_OVER_FOUR: Self = Self::from_u64(121666);

    /// Build a field element from a small integer.
    pub const fn from_u64(value: u64) -> Self {
        Self([value & LOW_51_BIT_MASK, value >> 51, 0, 0, 0])
    }

    /// Decode a little-endian u-coordinate.
    ///
    /// The most significant bit is ignored and values in `[p, 2^255)` are
    /// accepted and reduced, as RFC 7748 requires for X25519 inputs.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let load8 = |offset: usize| -> u64 {
            bytes[offset..offset + 8]
                .iter()
                .enumerate()
                .fold(0u64, |word, (i, byte)| word | (u64::from(*byte) << (8 * i)))
        };

        Self([
            load8(0) & LOW_51_BIT_MASK,
            (load8(6) >> 3) & LOW_51_BIT_MASK,
            (load8(12) >> 6) & LOW_51_BIT_MASK,
            (load8(19) >> 1) & LOW_51_BIT_MASK,
            (load8(24) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Canonical little-endian encoding of the fully reduced value.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut limbs = Self::weak_reduce(self.0).0;

        // Now limbs < 2p. Adding 19 carries out of bit 255 iff value >= p.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // value - q * p = value + 19 q - 2^255 q
        limbs[0] += 19 * q;

        limbs[1] += limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        // dropping the carry out of limb 4 subtracts 2^255 q
        limbs[4] &= LOW_51_BIT_MASK;

        let mut s = [0u8; 32];
        s[0] = limbs[0] as u8;
        s[1] = (limbs[0] >> 8) as u8;
        s[2] = (limbs[0] >> 16) as u8;
        s[3] = (limbs[0] >> 24) as u8;
        s[4] = (limbs[0] >> 32) as u8;
        s[5] = (limbs[0] >> 40) as u8;
        s[6] = ((limbs[0] >> 48) | (limbs[1] << 3)) as u8;
        s[7] = (limbs[1] >> 5) as u8;
        s[8] = (limbs[1] >> 13) as u8;
        s[9] = (limbs[1] >> 21) as u8;
        s[10] = (limbs[1] >> 29) as u8;
        s[11] = (limbs[1] >> 37) as u8;
        s[12] = ((limbs[1] >> 45) | (limbs[2] << 6)) as u8;
        s[13] = (limbs[2] >> 2) as u8;
        s[14] = (limbs[2] >> 10) as u8;
        s[15] = (limbs[2] >> 18) as u8;
        s[16] = (limbs[2] >> 26) as u8;
        s[17] = (limbs[2] >> 34) as u8;
        s[18] = (limbs[2] >> 42) as u8;
        s[19] = ((limbs[2] >> 50) | (limbs[3] << 1)) as u8;
        s[20] = (limbs[3] >> 7) as u8;
        s[21] = (limbs[3] >> 15) as u8;
        s[22] = (limbs[3] >> 23) as u8;
        s[23] = (limbs[3] >> 31) as u8;
        s[24] = (limbs[3] >> 39) as u8;
        s[25] = ((limbs[3] >> 47) | (limbs[4] << 4)) as u8;
        s[26] = (limbs[4] >> 4) as u8;
        s[27] = (limbs[4] >> 12) as u8;
        s[28] = (limbs[4] >> 20) as u8;
        s[29] = (limbs[4] >> 28) as u8;
        s[30] = (limbs[4] >> 36) as u8;
        s[31] = (limbs[4] >> 44) as u8;
        s
    }

    /// Carry every limb into its neighbour once, folding the top carry back
    /// into limb 0 via `2^255 = 19 (mod p)`. Result limbs are below 2^52.
    #[inline(always)]
    const fn weak_reduce(mut limbs: [u64; 5]) -> Self {
        let c0 = limbs[0] >> 51;
        let c1 = limbs[1] >> 51;
        let c2 = limbs[2] >> 51;
        let c3 = limbs[3] >> 51;
        let c4 = limbs[4] >> 51;

        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs[0] += c4 * 19;
        limbs[1] += c0;
        limbs[2] += c1;
        limbs[3] += c2;
        limbs[4] += c3;

        Self(limbs)
    }

    /// Carry a wide (128-bit per limb) intermediate down to 51-bit limbs.
    #[inline(always)]
    fn carry_wide(mut c: [u128; 5]) -> Self {
        c[1] += c[0] >> 51;
        let mut out0 = (c[0] as u64) & LOW_51_BIT_MASK;
        c[2] += c[1] >> 51;
        let mut out1 = (c[1] as u64) & LOW_51_BIT_MASK;
        c[3] += c[2] >> 51;
        let out2 = (c[2] as u64) & LOW_51_BIT_MASK;
        c[4] += c[3] >> 51;
        let out3 = (c[3] as u64) & LOW_51_BIT_MASK;

        let carry = (c[4] >> 51) as u64;
        let out4 = (c[4] as u64) & LOW_51_BIT_MASK;

        out0 += carry * 19;
        out1 += out0 >> 51;
        out0 &= LOW_51_BIT_MASK;

        Self([out0, out1, out2, out3, out4])
    }

    #[inline(always)]
    fn mul_inner(a: &[u64; 5], b: &[u64; 5]) -> Self {
        /*
        `square()` calls this with the same argument twice; keeping the body
        inlined lets the compiler merge the symmetric cross products.
        */
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            u128::from(x) * u128::from(y)
        }

        // Products landing at 2^255 and above wrap around multiplied by 19.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[4], b1_19) + m(a[3], b2_19) + m(a[2], b3_19) + m(a[1], b4_19);
        let c1 = m(a[1], b[0]) + m(a[0], b[1]) + m(a[4], b2_19) + m(a[3], b3_19) + m(a[2], b4_19);
        let c2 = m(a[2], b[0]) + m(a[1], b[1]) + m(a[0], b[2]) + m(a[4], b3_19) + m(a[3], b4_19);
        let c3 = m(a[3], b[0]) + m(a[2], b[1]) + m(a[1], b[2]) + m(a[0], b[3]) + m(a[4], b4_19);
        let c4 = m(a[4], b[0]) + m(a[3], b[1]) + m(a[2], b[2]) + m(a[1], b[3]) + m(a[0], b[4]);

        Self::carry_wide([c0, c1, c2, c3, c4])
    }

    /// Returns `self^2`.
    pub fn square(&self) -> Self {
        Self::mul_inner(&self.0, &self.0)
    }

    /// Returns `self^(2^k)` by `k` successive squarings, `k >= 1`.
    pub fn pow2k(&self, k: u32) -> Self {
        debug_assert!(k > 0);
        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> Self {
        self + self
    }

    /// Multiply by a small integer without building a full field element.
    pub fn mul_small(&self, rhs: u32) -> Self {
        let rhs = u128::from(rhs);
        Self::carry_wide(core::array::from_fn(|i| u128::from(self.0[i]) * rhs))
    }

    /// Returns `(self^(2^250 - 1), self^11)`, the shared prefix of the
    /// inversion and Legendre symbol addition chains.
    fn pow22501(&self) -> (Self, Self) {
        let t0 = self.square(); // 2
        let t1 = t0.pow2k(2); // 8
        let t2 = self * &t1; // 9
        let t3 = &t0 * &t2; // 11
        let t4 = t3.square(); // 22
        let t5 = &t2 * &t4; // 2^5 - 1
        let t6 = t5.pow2k(5);
        let t7 = &t6 * &t5; // 2^10 - 1
        let t8 = t7.pow2k(10);
        let t9 = &t8 * &t7; // 2^20 - 1
        let t10 = t9.pow2k(20);
        let t11 = &t10 * &t9; // 2^40 - 1
        let t12 = t11.pow2k(10);
        let t13 = &t12 * &t7; // 2^50 - 1
        let t14 = t13.pow2k(50);
        let t15 = &t14 * &t13; // 2^100 - 1
        let t16 = t15.pow2k(100);
        let t17 = &t16 * &t15; // 2^200 - 1
        let t18 = t17.pow2k(50);
        let t19 = &t18 * &t13; // 2^250 - 1

        (t19, t3)
    }

    /// Multiplicative inverse via Fermat's little theorem, `self^(p - 2)`.
    ///
    /// The inverse of zero is zero.
    pub fn invert(&self) -> Self {
        // p - 2 = 2^255 - 21 = (2^250 - 1) * 2^5 + 11
        let (t19, t3) = self.pow22501();
        &t19.pow2k(5) * &t3
    }

    /// Legendre symbol `self^((p - 1) / 2)`: one of `ZERO`, `ONE` or `MINUS_ONE`.
    pub fn legendre(&self) -> Self {
        // (p - 1) / 2 = 2^254 - 10 = (2^250 - 1) * 2^4 + 6
        let (t19, _) = self.pow22501();
        let a2 = self.square();
        let a6 = &a2.square() * &a2;
        &t19.pow2k(4) * &a6
    }

    /// Whether `self` is a square in GF(p). Zero counts as a square.
    pub fn is_square(&self) -> Choice {
        !self.legendre().ct_eq(&Self::MINUS_ONE)
    }

    /// Whether `self` is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("FieldElement(0x")?;
        for byte in self.to_bytes().iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(core::array::from_fn(|i| {
            u64::conditional_select(&a.0[i], &b.0[i], choice)
        }))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl DefaultIsZeroes for FieldElement {}

impl<'a> Add<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::weak_reduce(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl_binop_variants!(FieldElement, Add, add, AddAssign, add_assign);

impl<'a> Sub<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::weak_reduce(core::array::from_fn(|i| {
            (self.0[i] + SIXTEEN_P[i]) - rhs.0[i]
        }))
    }
}

impl_binop_variants!(FieldElement, Sub, sub, SubAssign, sub_assign);

impl<'a> Mul<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement::mul_inner(&self.0, &rhs.0)
    }
}

impl_binop_variants!(FieldElement, Mul, mul, MulAssign, mul_assign);

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::weak_reduce(core::array::from_fn(|i| SIXTEEN_P[i] - self.0[i]))
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::MODULUS_BYTES;
    use std::format;
    use hex_literal::hex;
    use proptest::prelude::*;

    const A: [u8; 32] = hex!("0a1b2c3d4e5f60718293a4b5c6d7e8f90112233445566778899aabbccddeeff0");
    const B: [u8; 32] = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");

    #[test]
    fn bytes_roundtrip_canonical() {
        let mut bytes = A;
        bytes[31] &= 0x7f;
        assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), bytes);
        assert_eq!(FieldElement::from_bytes(&B).to_bytes(), B);
    }

    #[test]
    fn from_bytes_ignores_high_bit() {
        let mut high = B;
        high[31] |= 0x80;
        assert_eq!(FieldElement::from_bytes(&high), FieldElement::from_bytes(&B));
    }

    #[test]
    fn non_canonical_inputs_reduce() {
        assert_eq!(FieldElement::from_bytes(&MODULUS_BYTES), FieldElement::ZERO);

        let mut p_plus_one = MODULUS_BYTES;
        p_plus_one[0] += 1;
        assert_eq!(FieldElement::from_bytes(&p_plus_one), FieldElement::ONE);

        let mut p_minus_one = MODULUS_BYTES;
        p_minus_one[0] -= 1;
        assert_eq!(FieldElement::from_bytes(&p_minus_one), FieldElement::MINUS_ONE);
        assert_eq!(FieldElement::MINUS_ONE.to_bytes(), p_minus_one);

        // 2^255 - 1 = p + 18
        let all_ones = [0xff; 32];
        assert_eq!(FieldElement::from_bytes(&all_ones), FieldElement::from_u64(18));
    }

    #[test]
    fn additive_identities() {
        let a = FieldElement::from_bytes(&A);
        assert_eq!(a - a, FieldElement::ZERO);
        assert_eq!(a + (-a), FieldElement::ZERO);
        assert_eq!(FieldElement::MINUS_ONE + FieldElement::ONE, FieldElement::ZERO);
        assert_eq!(-FieldElement::ONE, FieldElement::MINUS_ONE);
        assert_eq!(-FieldElement::ZERO, FieldElement::ZERO);
        assert_eq!(a.double(), a + a);
    }

    #[test]
    fn square_matches_mul() {
        let a = FieldElement::from_bytes(&A);
        let b = FieldElement::from_bytes(&B);
        assert_eq!(a.square(), a * a);
        assert_eq!(b.square(), &b * &b);
        assert_eq!(a.pow2k(3), a.square().square().square());
    }

    #[test]
    fn mul_small_matches_mul() {
        let a = FieldElement::from_bytes(&A);
        assert_eq!(a.mul_small(121666), a * FieldElement::A_PLUS_TWO_OVER_FOUR);
        assert_eq!(a.mul_small(0), FieldElement::ZERO);
        assert_eq!(a.mul_small(1), a);
    }

    #[test]
    fn invert() {
        for bytes in [A, B, [0xff; 32]] {
            let a = FieldElement::from_bytes(&bytes);
            assert_eq!(a * a.invert(), FieldElement::ONE);
        }
        assert_eq!(FieldElement::ONE.invert(), FieldElement::ONE);
        assert_eq!(FieldElement::MINUS_ONE.invert(), FieldElement::MINUS_ONE);
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn legendre_symbol() {
        // p = 5 (mod 8), so 2 is a non-residue and -1 is a residue
        assert_eq!(FieldElement::from_u64(2).legendre(), FieldElement::MINUS_ONE);
        assert_eq!(FieldElement::MINUS_ONE.legendre(), FieldElement::ONE);
        assert_eq!(FieldElement::ZERO.legendre(), FieldElement::ZERO);
        assert!(bool::from(FieldElement::ZERO.is_square()));
        assert!(!bool::from(FieldElement::from_u64(2).is_square()));

        let a = FieldElement::from_bytes(&A);
        assert!(bool::from(a.square().is_square()));
    }

    #[test]
    fn conditional_swap() {
        let mut a = FieldElement::from_bytes(&A);
        let mut b = FieldElement::from_bytes(&B);
        let (a0, b0) = (a, b);

        FieldElement::conditional_swap(&mut a, &mut b, Choice::from(0));
        assert_eq!((a, b), (a0, b0));
        FieldElement::conditional_swap(&mut a, &mut b, Choice::from(1));
        assert_eq!((a, b), (b0, a0));
    }

    #[test]
    fn debug_prints_big_endian_hex() {
        assert_eq!(
            format!("{:?}", FieldElement::from_u64(0x1234)),
            "FieldElement(0x0000000000000000000000000000000000000000000000000000000000001234)"
        );
    }

    proptest! {
        #[test]
        fn ring_axioms(a in any::<[u8; 32]>(), b in any::<[u8; 32]>(), c in any::<[u8; 32]>()) {
            let a = FieldElement::from_bytes(&a);
            let b = FieldElement::from_bytes(&b);
            let c = FieldElement::from_bytes(&c);

            prop_assert_eq!(a * b, b * a);
            prop_assert_eq!((a + b) * c, a * c + b * c);
            prop_assert_eq!((a - b) + b, a);
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn encoding_is_canonical(bytes in any::<[u8; 32]>()) {
            let encoded = FieldElement::from_bytes(&bytes).to_bytes();
            prop_assert!(encoded[31] & 0x80 == 0);
            prop_assert_eq!(FieldElement::from_bytes(&encoded).to_bytes(), encoded);
        }
    }
}
