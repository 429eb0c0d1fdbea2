//! compression/registry.rs
//! Name → factory registry.
//!
//! Readers resolve the codec name found in file metadata here; writers and
//! extensions register additional or replacement factories. Lookups read an
//! immutable snapshot published through `ArcSwap` and never block. Writers
//! are serialised by a mutex, copy the snapshot, and publish the new one.
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use tracing::debug;

use crate::compression::factory::{BuiltinFactory, CodecConfig};
use crate::compression::types::{Codec, CodecError, CodecFactory, Result};

type FactoryMap = HashMap<String, Arc<dyn CodecFactory>>;

pub struct CodecRegistry {
    factories: ArcSwap<FactoryMap>,
    write_lock: Mutex<()>,
}

impl CodecRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            factories: ArcSwap::from_pointee(HashMap::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Registry seeded with every built-in at its default configuration.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for config in CodecConfig::defaults() {
            registry.register(config.name(), Arc::new(BuiltinFactory::new(config)));
        }
        registry
    }

    /// Map `name` to `factory`, returning the factory it replaces.
    pub fn register(
        &self,
        name: impl Into<String>,
        factory: Arc<dyn CodecFactory>,
    ) -> Option<Arc<dyn CodecFactory>> {
        let name = name.into();
        let _guard = self.write_lock.lock();

        let mut next = FactoryMap::clone(&self.factories.load());
        let previous = next.insert(name.clone(), factory);
        self.factories.store(Arc::new(next));

        debug!(codec = %name, replaced = previous.is_some(), "codec factory registered");
        previous
    }

    /// Factory registered under `name`.
    ///
    /// # Errors
    /// - `CodecError::UnknownCodec` if nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn CodecFactory>> {
        match self.factories.load().get(name) {
            Some(factory) => Ok(Arc::clone(factory)),
            None => {
                debug!(codec = %name, "codec lookup failed");
                Err(CodecError::unknown(name))
            }
        }
    }

    /// Resolve `name` and build a fresh instance from its factory.
    pub fn create_instance(&self, name: &str) -> Result<Box<dyn Codec>> {
        Ok(self.resolve(name)?.create_instance())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.load().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.load().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: LazyLock<CodecRegistry> = LazyLock::new(CodecRegistry::with_builtins);

/// Process-wide registry, seeded with the built-ins on first access and
/// never torn down.
pub fn global() -> &'static CodecRegistry {
    &GLOBAL
}

/// Add or replace a factory in the process-wide registry.
pub fn register_codec(
    name: impl Into<String>,
    factory: Arc<dyn CodecFactory>,
) -> Option<Arc<dyn CodecFactory>> {
    global().register(name, factory)
}

/// Look up a factory in the process-wide registry.
pub fn resolve_codec(name: &str) -> Result<Arc<dyn CodecFactory>> {
    global().resolve(name)
}

/// Build a codec instance from the process-wide registry.
pub fn create_codec(name: &str) -> Result<Box<dyn Codec>> {
    global().create_instance(name)
}
