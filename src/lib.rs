#![crate_name = "prime_arith"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Overflow-safe 64-bit modular arithmetic and a deterministic primality
//! test.
//!
//! The arithmetic in [`zq`] never forms an intermediate wider than 64 bits:
//! addition compares against `m - b` instead of reducing the raw sum,
//! multiplication decomposes into modular doublings, and exponentiation
//! into modular squarings. [`primes::is_prime`] builds a Miller-Rabin
//! classifier on top of these primitives; with its fixed twelve-base
//! witness set the classification is exact for every `u64`, which makes it
//! suitable as the primality oracle of key-generation code.
//!
//! All functions are pure and allocation-free, and may be called
//! concurrently from any number of threads.
//!
//! ```rust
//! use prime_arith::{is_prime, mod_pow};
//!
//! assert!(is_prime(4611686018326724609));
//! assert_eq!(mod_pow(2, 61, 2305843009213693951), 1);
//! ```

mod errors;

pub mod primes;
pub mod zq;

pub use errors::{Error, Result};
pub use primes::is_prime;
pub use zq::{mod_add, mod_mul, mod_pow, mod_sub, Modulus};

#[cfg(test)]
#[macro_use]
extern crate proptest;
