/// Assert that an expression matches a pattern, with an optional guard.
///
/// The expression is matched by reference, so bindings in the guard are
/// references.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $($pat:pat_param)|+ $(if $guard:expr)? $(,)?) => {
        match &$expr {
            $($pat)|+ $(if $guard)? => {}
            #[allow(unreachable_patterns, reason = "the pattern may be irrefutable")]
            value => ::core::panic!(
                "assertion failed: `{:?}` does not match `{}`",
                value,
                ::core::stringify!($($pat)|+ $(if $guard)?),
            ),
        }
    };
}
