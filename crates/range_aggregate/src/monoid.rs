//! Aggregation policies.
//!
//! A structure never hardcodes its operation: it is handed a [`Monoid`] value
//! at construction. Zero-sized policies cover the usual integer folds, and
//! [`FnMonoid`] takes an identity and a closure at runtime.

use std::fmt;
use std::marker::PhantomData;

pub trait Monoid {
    type Value: Clone;

    /// Neutral element: `combine(x, identity) == combine(identity, x) == x`.
    fn identity(&self) -> Self::Value;

    /// Associative operation. `left` covers lower indices than `right`.
    fn combine(&self, left: &Self::Value, right: &Self::Value) -> Self::Value;
}

/// `combine(a, b) == combine(b, a)`.
pub trait Commutative: Monoid {}

/// `combine(a, a) == a`, so overlapping ranges may be folded twice.
pub trait Idempotent: Monoid {}

/// Commutative monoid with inverses.
pub trait Group: Commutative {
    /// `combine(value, inverse(value)) == identity`.
    fn inverse(&self, value: &Self::Value) -> Self::Value;
}

macro_rules! policy {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub struct $name<T>(PhantomData<fn() -> T>);

            impl<T> $name<T> {
                pub const fn new() -> Self {
                    Self(PhantomData)
                }
            }

            impl<T> Default for $name<T> {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<T> Clone for $name<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T> Copy for $name<T> {}

            impl<T> fmt::Debug for $name<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )*
    };
}

policy! {
    /// Wrapping addition, identity `0`. Any fold whose true result fits in
    /// `T` comes out exact, even if partial sums overflow.
    Sum,
    /// Minimum, identity `T::MAX`.
    Min,
    /// Maximum, identity `T::MIN`.
    Max,
    /// Bitwise or, identity `0`.
    BitOr,
    /// Bitwise and, identity all ones.
    BitAnd,
    /// Bitwise xor, identity `0`.
    BitXor,
}

macro_rules! impl_integer_policies {
    ($($t:ty),* $(,)?) => {
        $(
            impl Monoid for Sum<$t> {
                type Value = $t;

                #[inline(always)]
                fn identity(&self) -> $t {
                    0
                }

                #[inline(always)]
                fn combine(&self, left: &$t, right: &$t) -> $t {
                    left.wrapping_add(*right)
                }
            }

            impl Commutative for Sum<$t> {}

            impl Monoid for Min<$t> {
                type Value = $t;

                #[inline(always)]
                fn identity(&self) -> $t {
                    <$t>::MAX
                }

                #[inline(always)]
                fn combine(&self, left: &$t, right: &$t) -> $t {
                    (*left).min(*right)
                }
            }

            impl Commutative for Min<$t> {}
            impl Idempotent for Min<$t> {}

            impl Monoid for Max<$t> {
                type Value = $t;

                #[inline(always)]
                fn identity(&self) -> $t {
                    <$t>::MIN
                }

                #[inline(always)]
                fn combine(&self, left: &$t, right: &$t) -> $t {
                    (*left).max(*right)
                }
            }

            impl Commutative for Max<$t> {}
            impl Idempotent for Max<$t> {}

            impl Monoid for BitOr<$t> {
                type Value = $t;

                #[inline(always)]
                fn identity(&self) -> $t {
                    0
                }

                #[inline(always)]
                fn combine(&self, left: &$t, right: &$t) -> $t {
                    left | right
                }
            }

            impl Commutative for BitOr<$t> {}
            impl Idempotent for BitOr<$t> {}

            impl Monoid for BitAnd<$t> {
                type Value = $t;

                #[inline(always)]
                fn identity(&self) -> $t {
                    !0
                }

                #[inline(always)]
                fn combine(&self, left: &$t, right: &$t) -> $t {
                    left & right
                }
            }

            impl Commutative for BitAnd<$t> {}
            impl Idempotent for BitAnd<$t> {}

            impl Monoid for BitXor<$t> {
                type Value = $t;

                #[inline(always)]
                fn identity(&self) -> $t {
                    0
                }

                #[inline(always)]
                fn combine(&self, left: &$t, right: &$t) -> $t {
                    left ^ right
                }
            }

            impl Commutative for BitXor<$t> {}

            impl Group for BitXor<$t> {
                #[inline(always)]
                fn inverse(&self, value: &$t) -> $t {
                    *value
                }
            }
        )*
    };
}

impl_integer_policies!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_signed_sum_group {
    ($($t:ty),* $(,)?) => {
        $(
            impl Group for Sum<$t> {
                #[inline(always)]
                fn inverse(&self, value: &$t) -> $t {
                    value.wrapping_neg()
                }
            }
        )*
    };
}

impl_signed_sum_group!(i8, i16, i32, i64, i128, isize);

/// Greatest common divisor over `u64`, identity `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gcd;

/// Binary (Stein's) gcd. `gcd(0, x) == x`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}

impl Monoid for Gcd {
    type Value = u64;

    #[inline(always)]
    fn identity(&self) -> u64 {
        0
    }

    #[inline(always)]
    fn combine(&self, left: &u64, right: &u64) -> u64 {
        gcd(*left, *right)
    }
}

impl Commutative for Gcd {}
impl Idempotent for Gcd {}

/// Monoid assembled at runtime from an identity value and an operation.
///
/// The operation need not be commutative; structures always pass the
/// lower-index operand on the left.
#[derive(Clone)]
pub struct FnMonoid<T, F> {
    identity: T,
    op: F,
}

impl<T, F> FnMonoid<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    pub fn new(identity: T, op: F) -> Self {
        Self { identity, op }
    }
}

impl<T, F> Monoid for FnMonoid<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Value = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        (self.op)(left, right)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FnMonoid<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMonoid")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
