//! Minimal compile-time dependency injection.
//!
//! A [`Provider`] holds the leaf values of the dependency graph (configs,
//! connections, ...). Every other service derives [`Build`] and is assembled
//! recursively from its fields. Built values are cached per provider, so each
//! type is constructed at most once.

extern crate self as escolaryx_di;

pub use escolaryx_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct Counter(Arc<AtomicUsize>);

    #[derive(Debug, Clone)]
    struct Greeting(&'static str);

    #[derive(Debug, Clone, Build)]
    struct Leaf {
        greeting: Greeting,
        #[state]
        state: Arc<AtomicUsize>,
    }

    #[derive(Debug, Clone, Build)]
    struct Root<L> {
        first: L,
        second: L,
        counter: Counter,
    }

    provider! {
        TestProvider {
            greeting: Greeting,
            counter: Counter,
        }
    }

    #[test]
    fn provide_builds_graph() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hola"),
            counter: Counter(Default::default()),
        };

        let root: Root<Leaf> = provider.provide();

        assert_eq!(root.first.greeting.0, "hola");
        root.counter.0.fetch_add(1, Ordering::Relaxed);
        assert_eq!(provider.counter.0.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn provide_caches_built_values() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hola"),
            counter: Counter(Default::default()),
        };

        let root: Root<Leaf> = provider.provide();
        root.first.state.fetch_add(1, Ordering::Relaxed);

        assert_eq!(root.second.state.load(Ordering::Relaxed), 1);
        let leaf: Leaf = provider.provide();
        assert_eq!(leaf.state.load(Ordering::Relaxed), 1);
    }
}
