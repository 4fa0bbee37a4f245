use schema::{PokemonType, TYPE_COUNT};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// A value for each of the eighteen types, stored in chart order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeMap<T> {
    values: [T; TYPE_COUNT],
}

impl<T> TypeMap<T> {
    /// Builds a map by evaluating `f` once per type, in chart order.
    pub fn from_fn(f: impl FnMut(PokemonType) -> T) -> Self {
        Self {
            values: PokemonType::ALL.map(f),
        }
    }

    pub fn get(&self, pokemon_type: PokemonType) -> &T {
        &self.values[pokemon_type.index()]
    }

    /// Iterates `(type, value)` pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (PokemonType, &T)> {
        PokemonType::ALL.into_iter().zip(self.values.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T: Clone> TypeMap<T> {
    pub fn to_btree_map(&self) -> BTreeMap<PokemonType, T> {
        self.iter().map(|(t, v)| (t, v.clone())).collect()
    }
}

impl<T: Default> Default for TypeMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<PokemonType> for TypeMap<T> {
    type Output = T;

    fn index(&self, pokemon_type: PokemonType) -> &T {
        self.get(pokemon_type)
    }
}

impl<T> IndexMut<PokemonType> for TypeMap<T> {
    fn index_mut(&mut self, pokemon_type: PokemonType) -> &mut T {
        &mut self.values[pokemon_type.index()]
    }
}

impl<T: Serialize> Serialize for TypeMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(TYPE_COUNT))?;
        for (pokemon_type, value) in self.iter() {
            map.serialize_entry(&pokemon_type, value)?;
        }
        map.end()
    }
}
