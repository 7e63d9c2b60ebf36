use crate::{
    config::RegistryConfig,
    entry::DocumentEntry,
    error::RegistryError,
    markers::{DocumentMarker, DocumentRequirements},
    name,
};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::{Arc, RwLock},
};
use tracing::{debug, trace, warn};

/// A generic registry type using a HashMap.
pub type Registry<K, V> = HashMap<K, V>;

/// A thread-safe shared registry using Arc and RwLock.
pub type SharedRegistry<K, V> = Arc<RwLock<Registry<K, V>>>;

/// Registry of document descriptors keyed by dotted class name.
pub type DocumentRegistry = NameRegistry<DocumentEntry>;

/// The NameRegistry maps dotted names to registered entities.
/// Lookups go through `resolve`, which falls back to matching on the simple name
/// and then to the capitalized form of snake_case names when the exact key is missing.
/// Clones share the same underlying map.
pub struct NameRegistry<V> {
    entries: SharedRegistry<String, V>,
    config: RegistryConfig,
}

/// Outcome of a single lookup pass, before any denormalized retry
enum Lookup<'a, V> {
    Found(&'a V),
    /// Candidates sharing the simple name existed but none matched the inheritance chain
    NoMatch,
    NoCandidates,
}

impl<V: Clone> NameRegistry<V> {
    /// Create an empty registry with every fallback stage enabled.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry resolving with `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Returns the config `resolve` runs with.
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Inserts or overwrites the entity for `name`, returning the replaced entity if any.
    pub fn register(
        &self,
        name: impl Into<String>,
        entity: V,
    ) -> Result<Option<V>, RegistryError> {
        let name = name.into();
        let previous = self.entries.write()?.insert(name.clone(), entity);
        if previous.is_some() {
            debug!(name = %name, "Replaced registered entity");
        } else {
            trace!(name = %name, "Registered entity");
        }
        Ok(previous)
    }

    /// Returns the entity registered under exactly `name`, without any fallback.
    pub fn get(&self, name: &str) -> Result<Option<V>, RegistryError> {
        Ok(self.entries.read()?.get(name).cloned())
    }

    /// Returns true if `name` is registered verbatim.
    pub fn contains(&self, name: &str) -> Result<bool, RegistryError> {
        Ok(self.entries.read()?.contains_key(name))
    }

    /// Number of registered names.
    pub fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.entries.read()?.len())
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.entries.read()?.is_empty())
    }

    /// Snapshot of every registered name, sorted
    pub fn names(&self) -> Result<Vec<String>, RegistryError> {
        let mut names: Vec<String> = self.entries.read()?.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }

    /// Resolves `name` to its registered entity.
    ///
    /// Stages, stopping at the first hit:
    /// 1. the exact key
    /// 2. keys sharing the simple name: first one whose segment set equals the requested one,
    ///    else the shortest whose segment set is a superset of it
    /// 3. only when stage 2 found no keys at all: `name` read as snake_case is retried
    ///    once through stages 1 and 2 as its capitalized class name
    ///
    /// Keys tied on segment count are ordered lexicographically.
    pub fn resolve(&self, name: &str) -> Result<V, RegistryError> {
        let entries = self.entries.read()?;
        let found = match lookup(&entries, name, self.config.suffix_match) {
            Lookup::Found(entity) => Some(entity),
            Lookup::NoCandidates if self.config.denormalize => {
                let denormalized = name::denormalize(name);
                debug!(name, denormalized = %denormalized, "Retrying lookup as class name");
                match lookup(&entries, &denormalized, self.config.suffix_match) {
                    Lookup::Found(entity) => Some(entity),
                    Lookup::NoMatch | Lookup::NoCandidates => None,
                }
            }
            Lookup::NoCandidates | Lookup::NoMatch => None,
        };

        match found {
            Some(entity) => Ok(entity.clone()),
            None => {
                debug!(name, "Name not registered");
                Err(RegistryError::NotRegistered(name.to_string()))
            }
        }
    }
}

impl NameRegistry<DocumentEntry> {
    /// Registers document type `D` under its dotted class name.
    pub fn register_document<D: DocumentMarker + DocumentRequirements>(
        &self,
    ) -> Result<Option<DocumentEntry>, RegistryError> {
        let entry = DocumentEntry::of::<D>();
        self.register(entry.class_name(), entry)
    }

    /// Resolves `name` and builds a document from JSON bytes with the resolved entry.
    #[cfg(feature = "json")]
    pub fn construct_json(
        &self,
        name: &str,
        data: &[u8],
    ) -> Result<Box<dyn crate::Document>, RegistryError> {
        self.resolve(name)?.from_json(data)
    }

    /// Resolves `name` and builds a document from bitcode bytes with the resolved entry.
    #[cfg(feature = "binary")]
    pub fn construct_binary(
        &self,
        name: &str,
        data: &[u8],
    ) -> Result<Box<dyn crate::Document>, RegistryError> {
        self.resolve(name)?.from_binary(data)
    }
}

/// Single pass over stages 1 and 2
fn lookup<'a, V>(
    entries: &'a Registry<String, V>,
    name: &str,
    suffix_match: bool,
) -> Lookup<'a, V> {
    if let Some(entity) = entries.get(name) {
        return Lookup::Found(entity);
    }
    if !suffix_match {
        return Lookup::NoCandidates;
    }

    let simple = name::simple_name(name);
    let mut candidates: Vec<&str> = entries
        .keys()
        .map(String::as_str)
        .filter(|key| name::ends_with_simple_name(key, simple))
        .collect();
    if candidates.is_empty() {
        return Lookup::NoCandidates;
    }
    candidates.sort_unstable();
    trace!(name, ?candidates, "Matching candidates on inheritance chain");

    match closest_candidate(name, &candidates) {
        // Segments rejoined with the separator are the key itself
        Some(key) => match entries.get(key) {
            Some(entity) => Lookup::Found(entity),
            None => {
                warn!(name, key, "Selected candidate missing from registry");
                Lookup::NoMatch
            }
        },
        None => Lookup::NoMatch,
    }
}

/// Picks the candidate with the same inheritance segments as `name`,
/// else the one with the fewest segments among those containing all of them.
/// `candidates` must be sorted.
fn closest_candidate<'c>(name: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let requested = name::segment_set(name);
    let chains: Vec<(&'c str, HashSet<&'c str>)> = candidates
        .iter()
        .map(|key| (*key, name::segment_set(*key)))
        .collect();

    if let Some((key, _)) = chains.iter().find(|(_, chain)| *chain == requested) {
        return Some(*key);
    }

    chains
        .iter()
        .filter(|(_, chain)| chain.is_superset(&requested))
        .min_by(|(a, _), (b, _)| {
            name::segments(a)
                .len()
                .cmp(&name::segments(b).len())
                .then_with(|| a.cmp(b))
        })
        .map(|(key, _)| *key)
}

impl<V: Clone> Default for NameRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for NameRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            config: self.config,
        }
    }
}

impl<V> fmt::Debug for NameRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.entries.read().map(|entries| entries.len()).ok();
        f.debug_struct("NameRegistry")
            .field("entries", &len)
            .field("config", &self.config)
            .finish()
    }
}

/// Macro to register one or more document types with a registry.
#[macro_export]
macro_rules! register_document {
    ($registry:expr, $($document:ty),+ $(,)?) => {{
        $(
            if let Err(e) = $registry.register_document::<$document>() {
                panic!(
                    "Failed to register document type {} in registry {}: {}",
                    stringify!($document),
                    stringify!($registry),
                    e
                );
            }
        )+
    }};
}
