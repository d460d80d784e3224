//! Byte-view helpers.

/// Sum a read-only view of bytes.
///
/// Takes a borrowed slice, so a fixed array (`&[u8; N]`) or a `Vec<u8>` can be passed without copying.
/// The view is walked exactly once.
#[inline]
pub fn sum_bytes(data: &[u8]) -> u64 {
    let mut sum = 0u64;
    for &b in data {
        sum += u64::from(b);
    }
    sum
}
