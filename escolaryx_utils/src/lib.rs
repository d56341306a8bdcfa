pub use escolaryx_utils_derive::trace_instrument;

mod macros;

#[cfg(test)]
mod tests {
    use crate::{assert_matches, trace_instrument};

    #[derive(Debug)]
    enum Outcome {
        Delivered(u32),
        Failed,
    }

    #[trace_instrument(skip_all)]
    fn add(a: u32, b: u32) -> u32 {
        a + b
    }

    #[test]
    fn matches_pattern() {
        assert_matches!(Outcome::Delivered(1), Outcome::Delivered(_));
        assert_matches!(Outcome::Delivered(2), Outcome::Delivered(x) if *x == 2);
    }

    #[test]
    fn matches_alternatives() {
        assert_matches!(Outcome::Failed, Outcome::Delivered(_) | Outcome::Failed);
    }

    #[test]
    #[should_panic(expected = "`Failed` does not match")]
    fn mismatched_pattern() {
        assert_matches!(Outcome::Failed, Outcome::Delivered(_));
    }

    #[test]
    #[should_panic(expected = "`Delivered(3)` does not match")]
    fn mismatched_predicate() {
        assert_matches!(Outcome::Delivered(3), Outcome::Delivered(x) if *x == 2);
    }

    #[test]
    fn instrumented_fn_keeps_behavior() {
        assert_eq!(add(1, 2), 3);
    }
}
