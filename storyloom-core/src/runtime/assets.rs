use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Anything that can be registered in an [`AssetTable`].
pub trait Asset: Clone {
    fn new(id: String, name: String, image: String) -> Self;
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A character sprite. `image` is an opaque reference (URL or encoded blob)
/// that only the renderer interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// A background. Same shape as [`Character`], separate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub name: String,
    pub image: String,
}

impl Asset for Character {
    fn new(id: String, name: String, image: String) -> Self {
        Self { id, name, image }
    }
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Asset for Scene {
    fn new(id: String, name: String, image: String) -> Self {
        Self { id, name, image }
    }
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// Id-keyed lookup table that remembers registration order.
///
/// Registering an id twice replaces the entry in place.
#[derive(Debug, Clone)]
pub struct AssetTable<T> {
    entries: Vec<T>,
    index: FxHashMap<String, usize>,
}

impl<T> Default for AssetTable<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), index: FxHashMap::default() }
    }
}

impl<T: Asset> AssetTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: T) {
        match self.index.get(asset.id()) {
            Some(&slot) => {
                log::debug!("asset '{}' replaced", asset.id());
                self.entries[slot] = asset;
            }
            None => {
                self.index.insert(asset.id().to_string(), self.entries.len());
                self.entries.push(asset);
            }
        }
    }

    /// Creates an entry whose id is its display name.
    pub fn register(&mut self, name: impl Into<String>, image: impl Into<String>) -> &T {
        let name = name.into();
        let asset = T::new(name.clone(), name, image.into());
        let id = asset.id().to_string();
        self.insert(asset);
        &self.entries[self.index[&id]]
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|a| a.name()).collect()
    }
}

impl<T: Asset> FromIterator<T> for AssetTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for asset in iter {
            table.insert(asset);
        }
        table
    }
}

/// The two lookup tables playback resolves script ids against.
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub characters: AssetTable<Character>,
    pub scenes: AssetTable<Scene>,
}

impl Library {
    pub fn new(characters: AssetTable<Character>, scenes: AssetTable<Scene>) -> Self {
        Self { characters, scenes }
    }

    pub fn from_lists(characters: Vec<Character>, scenes: Vec<Scene>) -> Self {
        Self {
            characters: characters.into_iter().collect(),
            scenes: scenes.into_iter().collect(),
        }
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }
}
