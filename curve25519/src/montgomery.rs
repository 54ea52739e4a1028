// Montgomery-form arithmetic on Curve25519, `v^2 = u^3 + 486662 u^2 + u`.
//
// Only the u-coordinate is tracked. Every 32-byte string decodes to a u that
// lies either on the curve or on its quadratic twist, and the x-only ladder
// below is well defined for both.

use crate::field::FieldElement;
use crate::scalar::MontgomeryScalar;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Mul;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// `(A + 2) / 4` as a small multiplier for the ladder step.
const A24: u32 = 121666;

/// A point in Montgomery form, as the little-endian encoding of its
/// u-coordinate.
#[derive(Copy, Clone, Default)]
pub struct MontgomeryPoint(pub [u8; 32]);

impl MontgomeryPoint {
    /// The base point `u = 9` specified in RFC 7748.
    pub const GENERATOR: Self = {
        let mut bytes = [0u8; 32];
        bytes[0] = 9;
        Self(bytes)
    };

    /// The encoding of the point at infinity (and of the 2-torsion point
    /// `(0, 0)`, which the u-coordinate cannot tell apart from it).
    pub const IDENTITY: Self = Self([0u8; 32]);

    /// View the point as a byte array.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy the point out as a byte array.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Lift to projective `(u : 1)`.
    pub fn to_projective(&self) -> ProjectiveMontgomeryPoint {
        ProjectiveMontgomeryPoint {
            U: FieldElement::from_bytes(&self.0),
            W: FieldElement::ONE,
        }
    }

    /// Returns true if the point's order divides the cofactor 8.
    ///
    /// Computed as `[8]P == O`, which covers every encoding of every
    /// small-order point on the curve and on the twist, canonical or not.
    pub fn is_low_order(&self) -> Choice {
        self.to_projective()
            .double()
            .double()
            .double()
            .is_identity()
    }

    /// Returns true if `u` belongs to Curve25519 itself rather than to its
    /// twist, i.e. `u^3 + A u^2 + u` is a square.
    pub fn is_on_curve(&self) -> Choice {
        let u = FieldElement::from_bytes(&self.0);
        let v_squared = u * (u.square() + FieldElement::MONTGOMERY_A * u + FieldElement::ONE);
        v_squared.is_square()
    }

    /// Multiply the base point by `scalar`.
    pub fn mul_base(scalar: &MontgomeryScalar) -> Self {
        &Self::GENERATOR * scalar
    }
}

impl DefaultIsZeroes for MontgomeryPoint {}

impl fmt::Debug for MontgomeryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MontgomeryPoint(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

impl Hash for MontgomeryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Mul<&MontgomeryScalar> for &MontgomeryPoint {
    type Output = MontgomeryPoint;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, scalar: &MontgomeryScalar) -> MontgomeryPoint {
        // Algorithm 8 of Costello-Smith 2017, with a final swap so the
        // result does not rely on the low bit being clear.
        let affine_u = FieldElement::from_bytes(&self.0);
        let mut x0 = ProjectiveMontgomeryPoint::IDENTITY;
        let mut x1 = ProjectiveMontgomeryPoint {
            U: affine_u,
            W: FieldElement::ONE,
        };

        let mut swap = 0u8;
        for i in (0..MontgomeryScalar::BITS).rev() {
            let bit = scalar.bit(i);
            let choice = swap ^ bit;

            ProjectiveMontgomeryPoint::conditional_swap(&mut x0, &mut x1, Choice::from(choice));
            differential_add_and_double(&mut x0, &mut x1, &affine_u);

            swap = bit;
        }
        ProjectiveMontgomeryPoint::conditional_swap(&mut x0, &mut x1, Choice::from(swap));

        x0.to_affine()
    }
}

impl Mul<&MontgomeryPoint> for &MontgomeryScalar {
    type Output = MontgomeryPoint;

    fn mul(self, point: &MontgomeryPoint) -> MontgomeryPoint {
        point * self
    }
}

/// A point in projective `(U : W)` form, `u = U / W`.
#[derive(Copy, Clone, Debug)]
pub struct ProjectiveMontgomeryPoint {
    U: FieldElement,
    W: FieldElement,
}

impl ProjectiveMontgomeryPoint {
    /// The identity element of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        U: FieldElement::ONE,
        W: FieldElement::ZERO,
    };

    /// The generator point
    pub const GENERATOR: Self = Self {
        U: FieldElement::from_u64(9),
        W: FieldElement::ONE,
    };

    /// Double this point
    pub fn double(&self) -> Self {
        let v1 = (self.U + self.W).square();
        let v2 = (self.U - self.W).square();
        let U = v1 * v2;
        let v3 = v1 - v2;
        let v4 = FieldElement::A_PLUS_TWO_OVER_FOUR * v3;
        let v5 = v2 + v4;
        let W = v3 * v5;

        Self { U, W }
    }

    /// Returns true for the point at infinity (`W = 0`).
    pub fn is_identity(&self) -> Choice {
        self.W.is_zero()
    }

    /// Convert the point to affine form. The identity maps to `u = 0`.
    pub fn to_affine(&self) -> MontgomeryPoint {
        let u = self.U * self.W.invert();
        MontgomeryPoint(u.to_bytes())
    }
}

impl ConditionallySelectable for ProjectiveMontgomeryPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            U: FieldElement::conditional_select(&a.U, &b.U, choice),
            W: FieldElement::conditional_select(&a.W, &b.W, choice),
        }
    }
}

impl ConstantTimeEq for ProjectiveMontgomeryPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.U * other.W).ct_eq(&(other.U * self.W))
    }
}

impl PartialEq for ProjectiveMontgomeryPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectiveMontgomeryPoint {}

/// One ladder step: `P <- [2]P`, `Q <- P + Q`, given the affine u of `Q - P`.
fn differential_add_and_double(
    P: &mut ProjectiveMontgomeryPoint,
    Q: &mut ProjectiveMontgomeryPoint,
    affine_PmQ: &FieldElement,
) {
    let t0 = P.U + P.W;
    let t1 = P.U - P.W;
    let t2 = Q.U + Q.W;
    let t3 = Q.U - Q.W;

    let t4 = t0.square(); // (U_P + W_P)^2
    let t5 = t1.square(); // (U_P - W_P)^2

    let t6 = t4 - t5; // 4 U_P W_P

    let t7 = t0 * t3; // (U_P + W_P) (U_Q - W_Q)
    let t8 = t1 * t2; // (U_P - W_P) (U_Q + W_Q)

    let t9 = t7 + t8; // 2 (U_P U_Q - W_P W_Q)
    let t10 = t7 - t8; // 2 (W_P U_Q - U_P W_Q)

    let t11 = t9.square();
    let t12 = t10.square();
    let t13 = t6.mul_small(A24); // (A + 2) U_P W_P

    let t14 = t4 * t5; // (U_P^2 - W_P^2)^2
    let t15 = t13 + t5;

    let t16 = t6 * t15;
    let t17 = affine_PmQ * &t12;

    P.U = t14;
    P.W = t16;
    Q.U = t11;
    Q.W = t17;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::MODULUS_BYTES;
    use hex_literal::hex;

    /// Encodings of points of order 1, 2, 4 and 8, canonical and not.
    const LOW_ORDER: [[u8; 32]; 7] = [
        hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        hex!("0100000000000000000000000000000000000000000000000000000000000000"),
        hex!("e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800"),
        hex!("5f9c95bca3508c24b1d0b1559c83ef5b04445cc4581c8e86d8224eddd09f1157"),
        hex!("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
        hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
        hex!("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
    ];

    #[test]
    fn generator_is_valid() {
        let g = MontgomeryPoint::GENERATOR;
        assert!(bool::from(g.is_on_curve()));
        assert!(!bool::from(g.is_low_order()));
        assert_eq!(g.to_projective(), ProjectiveMontgomeryPoint::GENERATOR);
    }

    #[test]
    fn low_order_points() {
        for bytes in LOW_ORDER {
            assert!(bool::from(MontgomeryPoint(bytes).is_low_order()), "{bytes:02x?}");

            let mut high = bytes;
            high[31] |= 0x80;
            assert!(bool::from(MontgomeryPoint(high).is_low_order()), "{high:02x?}");
        }
        assert_eq!(MontgomeryPoint(MODULUS_BYTES), MontgomeryPoint(LOW_ORDER[5]));
    }

    #[test]
    fn order_eight_points_are_not_order_four() {
        for bytes in &LOW_ORDER[2..4] {
            let p = MontgomeryPoint(*bytes).to_projective();
            assert!(!bool::from(p.double().double().is_identity()));
            assert!(bool::from(p.double().double().double().is_identity()));
        }
    }

    #[test]
    fn twist_points_are_not_on_curve() {
        let on_curve = [4u8, 6, 7, 8, 9, 10];
        let on_twist = [2u8, 3, 5, 12, 14];

        for u in on_curve {
            let mut bytes = [0u8; 32];
            bytes[0] = u;
            assert!(bool::from(MontgomeryPoint(bytes).is_on_curve()), "u = {u}");
        }
        for u in on_twist {
            let mut bytes = [0u8; 32];
            bytes[0] = u;
            assert!(!bool::from(MontgomeryPoint(bytes).is_on_curve()), "u = {u}");
        }
    }

    #[test]
    fn ladder_matches_repeated_doubling() {
        // The all-zero input clamps to exactly 2^254.
        let scalar = MontgomeryScalar::from_bytes_clamped([0u8; 32]);
        let ladder = MontgomeryPoint::mul_base(&scalar);

        let mut doubled = ProjectiveMontgomeryPoint::GENERATOR;
        for _ in 0..254 {
            doubled = doubled.double();
        }
        assert_eq!(ladder, doubled.to_affine());
    }

    #[test]
    fn ladder_commutes() {
        let a = MontgomeryScalar::from_bytes_clamped([0x3c; 32]);
        let b = MontgomeryScalar::from_bytes_clamped([0xc3; 32]);

        let a_pub = MontgomeryPoint::mul_base(&a);
        let b_pub = &b * &MontgomeryPoint::GENERATOR;

        assert_eq!(&b_pub * &a, &a_pub * &b);
    }

    #[test]
    fn ladder_kills_low_order_points() {
        let scalar = MontgomeryScalar::from_bytes_clamped([0x5a; 32]);
        for bytes in LOW_ORDER {
            assert_eq!(&MontgomeryPoint(bytes) * &scalar, MontgomeryPoint::IDENTITY);
        }
    }

    #[test]
    fn identity_to_affine() {
        assert_eq!(
            ProjectiveMontgomeryPoint::IDENTITY.to_affine(),
            MontgomeryPoint::IDENTITY
        );
        assert!(bool::from(ProjectiveMontgomeryPoint::IDENTITY.is_identity()));
        assert_eq!(
            ProjectiveMontgomeryPoint::IDENTITY.double(),
            ProjectiveMontgomeryPoint::IDENTITY
        );
    }

    #[test]
    fn projective_equality_is_up_to_scaling() {
        let g = ProjectiveMontgomeryPoint::GENERATOR;
        let scaled = ProjectiveMontgomeryPoint {
            U: g.U.mul_small(7),
            W: g.W.mul_small(7),
        };
        assert_eq!(g, scaled);
        assert_ne!(g, g.double());
    }
}
