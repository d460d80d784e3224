//! Sequence extensions.
//!
//! Both helpers work on any `IntoIterator`, so they accept slices, arrays, `Vec`s and single-pass
//! iterators alike. Nothing here needs random access.

use crate::errors::CoreError;

/// Check whether a sequence yields no elements.
///
/// Pulls at most one element. An already-exhausted iterator is reported empty.
#[inline]
pub fn is_empty<I: IntoIterator>(sequence: I) -> bool {
    sequence.into_iter().next().is_none()
}

/// Return the element at position `index`, skipping everything before it.
///
/// ## Parameters
/// - `sequence`: any sequence; a single-pass iterator is consumed up to and including `index`.
/// - `index`: zero-based position.
///
/// ## Errors
/// - [`CoreError::NegativeIndex`] if `index < 0` (the sequence is not touched).
/// - [`CoreError::IndexOutOfRange`] if the sequence has `index` or fewer elements. `len` is the number of
///   elements it actually yielded.
pub fn get_at<I: IntoIterator>(sequence: I, index: i64) -> Result<I::Item, CoreError> {
    if index < 0 {
        return Err(CoreError::NegativeIndex { index });
    }
    // Positions past `usize::MAX` can never be reached
    let skip = usize::try_from(index).unwrap_or(usize::MAX);

    let mut len = 0usize;
    for item in sequence {
        if len == skip {
            return Ok(item);
        }
        len += 1;
    }
    Err(CoreError::IndexOutOfRange { index, len })
}

/// Method-call syntax for the sequence helpers on any iterator.
pub trait SequenceExt: Iterator + Sized {
    /// See [`is_empty`]. Named to avoid clashing with `ExactSizeIterator::is_empty`.
    fn is_empty_seq(self) -> bool {
        is_empty(self)
    }

    /// See [`get_at`].
    fn get_at(self, index: i64) -> Result<Self::Item, CoreError> {
        get_at(self, index)
    }
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_non_empty() {
        assert!(is_empty(Vec::<i32>::new()));
        assert!(!is_empty([7]));
        assert!(!is_empty(&["zero", "one", "two"]));
    }

    #[test]
    fn exhausted_iterator_is_empty() {
        let mut it = [1, 2].into_iter();
        it.by_ref().for_each(drop);
        assert!(is_empty(it));
    }

    #[test]
    fn is_empty_pulls_at_most_one() {
        let mut pulled = 0;
        let it = std::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });
        assert!(!is_empty(it));
        assert_eq!(pulled, 1);
    }

    #[test]
    fn get_at_returns_element() {
        let words = ["zero", "one", "two"];
        assert_eq!(get_at(words, 0), Ok("zero"));
        assert_eq!(get_at(words, 1), Ok("one"));
        assert_eq!(get_at(words, 2), Ok("two"));
    }

    #[test]
    fn get_at_past_end_fails() {
        assert_eq!(
            get_at(["a", "b", "c"], 3),
            Err(CoreError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            get_at(Vec::<u8>::new(), 0),
            Err(CoreError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn get_at_negative_fails_fast() {
        let mut touched = false;
        let it = std::iter::from_fn(|| {
            touched = true;
            Some(1)
        });
        assert_eq!(get_at(it, -1), Err(CoreError::NegativeIndex { index: -1 }));
        assert!(!touched, "negative index must not consume the sequence");
    }

    #[test]
    fn get_at_consumes_single_pass_prefix() {
        let mut it = 10..20;
        assert_eq!(get_at(&mut it, 2), Ok(12));
        assert_eq!(it.next(), Some(13));
    }

    #[test]
    fn extension_methods_delegate() {
        let words = vec!["zero".to_string(), "one".to_string()];
        assert!(!words.iter().is_empty_seq());
        assert_eq!(words.iter().get_at(1).map(String::as_str), Ok("one"));
        assert!(std::iter::empty::<u8>().is_empty_seq());
    }
}
