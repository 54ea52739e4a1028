//! Internal macros.

/// Derive the by-value and mixed-reference forms of a binary operator, plus
/// both `*Assign` forms, from an `impl Op<&T> for &T`.
macro_rules! impl_binop_variants {
    ($ty:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<'b> $op<&'b $ty> for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: &'b $ty) -> $ty {
                (&self).$method(rhs)
            }
        }

        impl<'a> $op<$ty> for &'a $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                self.$method(&rhs)
            }
        }

        impl $op<$ty> for $ty {
            type Output = $ty;

            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                (&self).$method(&rhs)
            }
        }

        impl<'b> $op_assign<&'b $ty> for $ty {
            #[inline]
            fn $method_assign(&mut self, rhs: &'b $ty) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $op_assign<$ty> for $ty {
            #[inline]
            fn $method_assign(&mut self, rhs: $ty) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}
