//! Prime table sizing

/// Returns true if `n` is prime, by trial division with odd divisors up to `sqrt(n)`
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn is_prime(n: usize) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 => false,
        _ => {
            let mut divisor = 3;
            // `divisor <= n / divisor` is `divisor * divisor <= n` without overflow
            while divisor <= n / divisor {
                if n % divisor == 0 {
                    return false;
                }
                divisor += 2;
            }
            true
        }
    }
}

/// Returns the smallest odd prime that is at least `n`.
///
/// Even inputs are bumped to the next odd number first, so `next_prime(2)` is 3.
/// The result is never even and never 1.
///
/// Overflow past `usize::MAX` is not recoverable and panics in debug builds.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };

    while !is_prime(candidate) {
        candidate += 2;
    }

    candidate
}
