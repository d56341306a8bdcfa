use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

/// Values keyed by their type, at most one per type.
#[derive(Debug, Default)]
pub struct TypeMap {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl TypeMap {
    /// Clone of the stored value of type `T`, if any.
    pub fn get<T: Clone + 'static>(&self) -> Option<T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    /// Store `value`, replacing a previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_inserted_value() {
        let mut map = TypeMap::default();
        map.insert(7u32);
        map.insert(String::from("seven"));

        assert_eq!(map.get::<u32>(), Some(7));
        assert_eq!(map.get::<String>().as_deref(), Some("seven"));
        assert_eq!(map.get::<u64>(), None);
    }

    #[test]
    fn insert_replaces() {
        let mut map = TypeMap::default();
        map.insert(1u8);
        map.insert(2u8);

        assert_eq!(map.get::<u8>(), Some(2));
    }
}
