//! Longest-prefix root matching against an existence predicate.

/// Split a dash-joined `input` into its longest known root and the rest.
///
/// The whole input is tried first, then every prefix ending before a `-`,
/// from the longest to the shortest. The returned value is the text after the
/// dash that ended the matching prefix, or `None` when the whole input
/// matched. Inputs without any dash that start with `@` fall back to an `@`
/// root, so `@lg` reads as root `@` with value `lg`.
///
/// Returns `None` when no prefix is known.
///
/// # Examples
/// ```
/// use candidate_parser::find_root;
/// let known = |name: &str| matches!(name, "bg" | "border-color");
/// assert_eq!(find_root("bg-red-500", known), Some(("bg", Some("red-500"))));
/// assert_eq!(find_root("border-color-red", known), Some(("border-color", Some("red"))));
/// assert_eq!(find_root("text-red", known), None);
/// ```
pub fn find_root(input: &str, exists: impl Fn(&str) -> bool) -> Option<(&str, Option<&str>)> {
    if exists(input) {
        return Some((input, None));
    }

    let Some(mut idx) = input.rfind('-') else {
        if input.starts_with('@') && exists("@") {
            return Some(("@", input.get(1..)));
        }
        return None;
    };

    loop {
        let (root, rest) = input.split_at(idx);
        if exists(root) {
            return Some((root, rest.get(1..)));
        }
        match root.rfind('-') {
            Some(next) if next > 0 => idx = next,
            _ => return None,
        }
    }
}
