/// Given an implementation of `T == U`, implements:
/// - `&T == U`
/// - `T == &U`
///
/// `&T == &U` comes for free.
#[doc(hidden)]
#[macro_export]
macro_rules! forward_ref_partial_eq {
    ($t:ty, $u:ty) => {
        // `&T == U`
        impl<'a> PartialEq<$u> for &'a $t {
            #[inline]
            fn eq(&self, rhs: &$u) -> bool {
                **self == *rhs
            }
        }

        // `T == &U`
        impl PartialEq<&$u> for $t {
            #[inline]
            fn eq(&self, rhs: &&$u) -> bool {
                *self == **rhs
            }
        }
    };
}

/// Implements the arithmetic operator traits for a const-generic integer
/// wrapper, forwarding to its `checked_*` methods and panicking with the
/// same messages as the primitive integers do.
macro_rules! impl_int_ops {
    ($t:ident) => {
        impl<const BYTES: usize> core::ops::Add for $t<BYTES> {
            type Output = Self;

            #[track_caller]
            fn add(self, rhs: Self) -> Self {
                self.checked_add(rhs)
                    .unwrap_or_else(|_| panic!("attempt to add with overflow"))
            }
        }

        impl<const BYTES: usize> core::ops::Sub for $t<BYTES> {
            type Output = Self;

            #[track_caller]
            fn sub(self, rhs: Self) -> Self {
                self.checked_sub(rhs)
                    .unwrap_or_else(|_| panic!("attempt to subtract with overflow"))
            }
        }

        impl<const BYTES: usize> core::ops::Mul for $t<BYTES> {
            type Output = Self;

            #[track_caller]
            fn mul(self, rhs: Self) -> Self {
                self.checked_mul(rhs)
                    .unwrap_or_else(|_| panic!("attempt to multiply with overflow"))
            }
        }

        impl<const BYTES: usize> core::ops::Div for $t<BYTES> {
            type Output = Self;

            #[track_caller]
            fn div(self, rhs: Self) -> Self {
                match self.checked_div(rhs) {
                    Ok(value) => value,
                    Err($crate::errors::DivisionError::DivideByZero) => {
                        panic!("attempt to divide by zero")
                    }
                    Err($crate::errors::DivisionError::Overflow) => {
                        panic!("attempt to divide with overflow")
                    }
                }
            }
        }

        impl<const BYTES: usize> core::ops::Rem for $t<BYTES> {
            type Output = Self;

            /// # Panics
            ///
            /// This operation will panic if `rhs` is zero or the remainder overflows.
            #[track_caller]
            fn rem(self, rhs: Self) -> Self {
                match self.checked_rem(rhs).map_err($crate::errors::DivisionError::from) {
                    Ok(value) => value,
                    Err($crate::errors::DivisionError::DivideByZero) => {
                        panic!("attempt to calculate the remainder with a divisor of zero")
                    }
                    Err($crate::errors::DivisionError::Overflow) => {
                        panic!("attempt to calculate the remainder with overflow")
                    }
                }
            }
        }

        impl_int_ops!(@assign $t, AddAssign, add_assign, Add, add);
        impl_int_ops!(@assign $t, SubAssign, sub_assign, Sub, sub);
        impl_int_ops!(@assign $t, MulAssign, mul_assign, Mul, mul);
        impl_int_ops!(@assign $t, DivAssign, div_assign, Div, div);
        impl_int_ops!(@assign $t, RemAssign, rem_assign, Rem, rem);
    };
    (@assign $t:ident, $imp:ident, $method:ident, $op:ident, $op_method:ident) => {
        impl<const BYTES: usize> core::ops::$imp for $t<BYTES> {
            #[track_caller]
            fn $method(&mut self, rhs: Self) {
                *self = core::ops::$op::$op_method(*self, rhs);
            }
        }

        impl<'a, const BYTES: usize> core::ops::$imp<&'a $t<BYTES>> for $t<BYTES> {
            #[track_caller]
            fn $method(&mut self, rhs: &'a $t<BYTES>) {
                *self = core::ops::$op::$op_method(*self, *rhs);
            }
        }

        impl<'a, const BYTES: usize> core::ops::$op<&'a $t<BYTES>> for $t<BYTES> {
            type Output = Self;

            #[track_caller]
            fn $op_method(self, rhs: &'a $t<BYTES>) -> Self {
                core::ops::$op::$op_method(self, *rhs)
            }
        }

        impl<'a, const BYTES: usize> core::ops::$op<$t<BYTES>> for &'a $t<BYTES> {
            type Output = $t<BYTES>;

            #[track_caller]
            fn $op_method(self, rhs: $t<BYTES>) -> $t<BYTES> {
                core::ops::$op::$op_method(*self, rhs)
            }
        }
    };
}

pub(crate) use impl_int_ops;
