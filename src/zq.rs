//! Ring operations over Z/mZ for arbitrary 64-bit moduli.
//!
//! The free functions are the overflow-safe primitives: no operation ever
//! forms an intermediate wider than 64 bits, so every modulus up to
//! `u64::MAX` is supported. [`Modulus`] wraps a validated modulus and
//! exposes the same operations as methods.

use std::ops::Deref;

use crate::errors::{Error, Result};
use crate::primes::is_prime;

/// Overflow-safe addition of `a` and `b` modulo `m`.
///
/// Aborts if `a >= m` or `b >= m` in debug mode; release builds leave the
/// result unspecified when the preconditions are violated.
#[must_use]
pub const fn mod_add(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(a < m && b < m);

    // Comparing against m - b decides whether a + b >= m without forming
    // the overflow-prone sum; b < m keeps m - b from underflowing.
    let r = if a >= m - b { a - (m - b) } else { a + b };
    r % m
}

/// Overflow-safe subtraction of `b` from `a` modulo `m`.
///
/// Aborts if `a >= m` or `b >= m` in debug mode; release builds leave the
/// result unspecified when the preconditions are violated.
#[must_use]
pub const fn mod_sub(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(a < m && b < m);

    if a < b {
        // m - b is formed first so the intermediate stays below m even
        // when m is close to 2^64.
        ((m - b) + a) % m
    } else {
        (a - b) % m
    }
}

// One bit-scanning ladder serves both mod_mul (double-and-add over mod_add)
// and mod_pow (square-and-multiply over mod_mul): walk the bits of b from
// least to most significant, folding a into the accumulator wherever a bit
// is set, doubling (resp. squaring) a at every step. A macro rather than a
// closure-taking helper keeps both instantiations `const fn`.
macro_rules! bit_scan {
    ($a:expr, $b:expr, $m:expr, $identity:expr, $combine:ident) => {{
        let m = $m;
        let mut a = $a % m;
        let mut b = $b;
        let mut r: u64 = $identity;
        while b > 0 {
            if b & 1 == 1 {
                r = $combine(r, a, m);
            }
            a = $combine(a, a, m);
            b >>= 1;
        }
        r
    }};
}

/// Multiplication of `a` and `b` modulo `m`, decomposed into modular
/// doublings so that no intermediate exceeds 64 bits.
///
/// `a` and `b` are reduced internally. Aborts if `m == 0` in debug mode.
#[must_use]
pub const fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m >= 1);
    bit_scan!(a, b, m, 0, mod_add)
}

/// Exponentiation of `a` to the `b`-th power modulo `m`, by
/// square-and-multiply over [`mod_mul`].
///
/// The accumulator starts at the reduced multiplicative identity, so
/// `mod_pow(a, 0, m) == 1 % m` for every `a`. Aborts if `m == 0` in debug
/// mode.
#[must_use]
pub const fn mod_pow(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m >= 1);
    bit_scan!(a, b, m, 1 % m, mod_mul)
}

/// Structure encapsulating a nonzero 64-bit integer modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    p: u64,
}

// Override the dereference to return the underlying modulus.
impl Deref for Modulus {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.p
    }
}

impl Modulus {
    /// Create a modulus from a nonzero integer.
    pub fn new(p: u64) -> Result<Self> {
        if p == 0 {
            Err(Error::InvalidModulus(p))
        } else {
            Ok(Self { p })
        }
    }

    /// Performs the modular addition of a and b.
    ///
    /// Aborts if a >= p or b >= p in debug mode.
    #[must_use]
    pub const fn add(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        mod_add(a, b, self.p)
    }

    /// Performs the modular subtraction of a and b.
    ///
    /// Aborts if a >= p or b >= p in debug mode.
    #[must_use]
    pub const fn sub(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        mod_sub(a, b, self.p)
    }

    /// Performs the modular multiplication of a and b.
    ///
    /// Aborts if a >= p or b >= p in debug mode.
    #[must_use]
    pub const fn mul(&self, a: u64, b: u64) -> u64 {
        debug_assert!(a < self.p && b < self.p);
        mod_mul(a, b, self.p)
    }

    /// Modular negation.
    ///
    /// Aborts if a >= p in debug mode.
    #[must_use]
    pub const fn neg(&self, a: u64) -> u64 {
        debug_assert!(a < self.p);
        mod_sub(0, a, self.p)
    }

    /// Modular reduction of a u64.
    #[must_use]
    pub const fn reduce(&self, a: u64) -> u64 {
        a % self.p
    }

    /// Modular exponentiation.
    ///
    /// Aborts if a >= p in debug mode.
    #[must_use]
    pub fn pow(&self, a: u64, n: u64) -> u64 {
        debug_assert!(a < self.p);
        mod_pow(a, n, self.p)
    }

    /// Modular inversion.
    ///
    /// Returns None if p is not prime or a = 0.
    /// Aborts if a >= p in debug mode.
    #[must_use]
    pub fn inv(&self, a: u64) -> Option<u64> {
        debug_assert!(a < self.p);
        if !is_prime(self.p) || a == 0 {
            None
        } else {
            let r = mod_pow(a, self.p - 2, self.p);
            debug_assert_eq!(mod_mul(a, r, self.p), 1);
            Some(r)
        }
    }
}
