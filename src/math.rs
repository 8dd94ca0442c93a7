//! Integer helpers for cycle lengths and coordinate steps

use num_integer::{Integer, Roots};
use num_traits::Zero;

/// Greatest common divisor, always non-negative. `gcd(0, 0)` is zero.
pub fn gcd<T: Integer>(a: T, b: T) -> T {
    a.gcd(&b)
}

/// Greatest common divisor of every value, `None` when there are none
pub fn gcd_multiple<T, I>(values: I) -> Option<T>
where
    T: Integer,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(|acc, value| acc.gcd(&value))
}

/// Least common multiple, always non-negative. Zero when either input is zero.
pub fn lcm<T: Integer>(a: T, b: T) -> T {
    a.lcm(&b)
}

/// Least common multiple of every value, `None` when there are none
pub fn lcm_multiple<T, I>(values: I) -> Option<T>
where
    T: Integer,
    I: IntoIterator<Item = T>,
{
    values.into_iter().reduce(|acc, value| acc.lcm(&value))
}

/// All positive divisors of `n` in ascending order. Zero has none.
pub fn divisors(n: u64) -> Vec<u64> {
    let mut small = Vec::new();
    let mut large = Vec::new();

    for i in 1..=n.sqrt() {
        if n % i == 0 {
            small.push(i);
            if i != n / i {
                large.push(n / i);
            }
        }
    }

    small.extend(large.into_iter().rev());
    small
}

/// -1, 0 or 1 according to the sign of `x`
pub fn sign<T: Zero + PartialOrd>(x: T) -> i32 {
    let zero = T::zero();
    if x > zero {
        1
    } else if x < zero {
        -1
    } else {
        0
    }
}
