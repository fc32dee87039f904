//! Scalar arithmetic over small prime fields.
//!
//! Scalars are `u16` values in `[0, p)` for an odd prime `p < 2^16`, so the
//! product of two scalars always fits in a `u32`.

use feanor_math::algorithms::eea::eea;
use feanor_math::algorithms::miller_rabin::is_prime;
use feanor_math::primitive_int::StaticRing;

use crate::error::MatrixError;

/// A field element reduced modulo the characteristic.
pub type Scalar = u16;

/// Double-width type holding the product of two scalars.
pub type WideScalar = u32;

/// Column index of a matrix entry.
pub type ColIndex = u32;

/// Position of a row in a matrix.
pub type RowIndex = usize;

/// Reduce a dense magnitude modulo `modulus`.
#[inline]
pub fn reduce(value: u64, modulus: Scalar) -> Scalar {
    (value % u64::from(modulus)) as Scalar
}

/// Compute `(a * b) mod modulus` through a double-width product.
#[inline]
pub fn modular_product(a: Scalar, b: Scalar, modulus: Scalar) -> Scalar {
    let product = WideScalar::from(a) * WideScalar::from(b);
    (product % WideScalar::from(modulus)) as Scalar
}

/// Compute the inverse of `a` modulo the prime `modulus`.
///
/// Returns the unique `t` in `[1, modulus)` with `a * t ≡ 1 (mod modulus)`.
/// The result is meaningless when `a ≡ 0` or `modulus` is not prime.
///
/// # Example
/// ```
/// use modp_sparse::scalar::modular_inverse;
///
/// assert_eq!(modular_inverse(3, 7), 5);
/// ```
pub fn modular_inverse(a: Scalar, modulus: Scalar) -> Scalar {
    debug_assert!(a != 0);
    debug_assert!(a < modulus);

    let modulus = i32::from(modulus);
    let (s, _, gcd) = eea(i32::from(a), modulus, StaticRing::<i32>::RING);
    debug_assert_eq!(gcd, 1, "{a} has no inverse modulo {modulus}");
    s.rem_euclid(modulus) as Scalar
}

/// Miller-Rabin rounds; a composite passes with probability at most `4^-k`.
const PRIMALITY_ROUNDS: usize = 30;

/// Check whether `n` is an odd prime.
pub fn is_odd_prime(n: Scalar) -> bool {
    n >= 3 && n % 2 == 1 && is_prime(StaticRing::<i64>::RING, &i64::from(n), PRIMALITY_ROUNDS)
}

/// Accept `modulus` only if it is an odd prime.
pub fn check_modulus(modulus: Scalar) -> Result<Scalar, MatrixError> {
    if is_odd_prime(modulus) {
        Ok(modulus)
    } else {
        Err(MatrixError::InvalidModulus(modulus))
    }
}
