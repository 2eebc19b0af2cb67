//! `n!`, computed recursively.

/// Computes `n!` as `n * (n - 1)!` with `0! == 1`. Returns `None` once the result no longer
/// fits in a `u64`, which happens from `21!` on.
///
/// # Examples
///
/// ```
/// use datastructs::factorial::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: u32) -> Option<u64> {
    match n {
        0 => Some(1),
        n => factorial(n - 1)?.checked_mul(u64::from(n)),
    }
}
