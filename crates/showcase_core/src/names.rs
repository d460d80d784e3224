//! `nameof`-style type names.

/// Return the short name of `T` with generic arguments and the module path removed.
///
/// ## Examples
/// ```rust
/// use showcase_core::unbound_type_name;
/// assert_eq!(unbound_type_name::<Vec<i32>>(), "Vec");
/// assert_eq!(unbound_type_name::<std::collections::HashMap<String, u8>>(), "HashMap");
/// assert_eq!(unbound_type_name::<u8>(), "u8");
/// ```
///
/// ## Notes
/// - Based on `std::any::type_name`, whose exact output is not guaranteed across compiler versions. Only
///   the last path segment before the first `<` is kept, which is stable in practice.
pub fn unbound_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split_once('<').map_or(full, |(head, _)| head);
    base.rsplit_once("::").map_or(base, |(_, last)| last)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Local;

    #[test]
    fn strips_path_and_arguments() {
        assert_eq!(unbound_type_name::<Vec<String>>(), "Vec");
        assert_eq!(unbound_type_name::<Option<Vec<u8>>>(), "Option");
    }

    #[test]
    fn non_generic_types() {
        assert_eq!(unbound_type_name::<Local>(), "Local");
        assert_eq!(unbound_type_name::<str>(), "str");
    }
}
