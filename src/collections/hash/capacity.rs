//! Slot count policy for [`HashSet`](super::HashSet).
//!
//! Tables are sized to primes so that `hash mod cap` spreads poorly distributed hashes (such as
//! small integers or multiples of a common stride) over every slot.

/// The number of slots allocated by [`HashSet::new`](super::HashSet::new).
pub const DEFAULT_CAP: usize = 3;

/// Multiplier applied to the current capacity before rounding up to the next prime.
const GROWTH_FACTOR: usize = 2;

// Each entry is a little more than double the last, enough for most tables to avoid the slow path.
const PRIMES: [usize; 36] = [
    3, 7, 11, 17, 23, 29, 37, 47, 59, 71, 89, 107, 131, 163, 197, 239, 293, 353, 431, 521, 631, 761,
    919, 1103, 1327, 1597, 1931, 2333, 2801, 3371, 4049, 4861, 5839, 7013, 8419, 10103,
];

/// Returns a slot count suitable for holding `count` elements, always at least 1.
///
/// Because the table resizes when its length reaches its capacity, the result is strictly greater
/// than `count`, so that a table filled with `count` elements never grows while being populated.
pub fn cap_for_count(count: usize) -> usize {
    next_prime(count.saturating_add(1))
}

/// Returns the capacity a table with `cap` slots should grow into. The result is always strictly
/// greater than `cap`.
///
/// # Panics
/// Panics if the grown capacity would overflow a [`usize`].
pub fn grown_cap(cap: usize) -> usize {
    let target = cap
        .checked_mul(GROWTH_FACTOR)
        .expect("Capacity overflow while growing HashSet!");
    next_prime(target.max(cap + 1))
}

/// Finds the smallest prime greater than or equal to `min`, using the table where possible.
fn next_prime(min: usize) -> usize {
    if let Some(prime) = PRIMES.iter().copied().find(|p| *p >= min) {
        return prime;
    }

    // Only odd candidates can be prime past the end of the table.
    let mut candidate = min | 1;
    while !is_prime(candidate) {
        candidate = candidate
            .checked_add(2)
            .expect("Capacity overflow while searching for a prime!");
    }
    candidate
}

fn is_prime(candidate: usize) -> bool {
    if candidate < 2 {
        return false;
    }
    if candidate % 2 == 0 {
        return candidate == 2;
    }

    let mut divisor = 3;
    while divisor <= candidate / divisor {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
