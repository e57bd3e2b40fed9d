//! Caching ID resolver on top of a [`Directory`]

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::interfaces::{Directory, ResolveContext, Resolver};
use crate::types::EntityKind;

const DEFAULT_CACHE_SIZE: usize = 1024;

/// Resolves service and node IDs to names, remembering every answer.
///
/// Entities the directory does not know (for example deleted nodes) resolve
/// to their own ID. Directory errors are returned unchanged and are not
/// cached, so a later call retries the lookup.
pub struct IdResolver<D> {
    directory: D,
    no_resolve: bool,
    cache: Mutex<LruCache<(EntityKind, String), String>>,
}

impl<D: Directory> IdResolver<D> {
    pub fn new(directory: D, no_resolve: bool) -> Self {
        let capacity = NonZeroUsize::new(DEFAULT_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(directory, no_resolve, capacity)
    }

    pub fn with_capacity(directory: D, no_resolve: bool, capacity: NonZeroUsize) -> Self {
        Self {
            directory,
            no_resolve,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    fn lookup(&self, kind: EntityKind, id: &str) -> Result<String> {
        let name = match kind {
            EntityKind::Service => self.directory.service(id)?.map(|service| service.name),
            EntityKind::Node => self
                .directory
                .node(id)?
                .map(|node| node.display_name().to_string()),
        };
        Ok(name.filter(|name| !name.is_empty()).unwrap_or_else(|| id.to_string()))
    }
}

impl<D: Directory> Resolver for IdResolver<D> {
    fn resolve(&self, ctx: &ResolveContext, kind: EntityKind, id: &str) -> Result<String> {
        if self.no_resolve || id.is_empty() {
            return Ok(id.to_string());
        }

        let key = (kind, id.to_string());
        {
            let mut cache = self
                .cache
                .lock()
                .map_err(|e| Error::Other(format!("Resolver cache poisoned: {e}")))?;
            if let Some(name) = cache.get(&key) {
                tracing::trace!("Cache hit for {} {}", kind, id);
                return Ok(name.clone());
            }
        }

        ctx.check()?;
        tracing::debug!("Resolving {} {}", kind, id);
        let name = self.lookup(kind, id)?;

        self.cache
            .lock()
            .map_err(|e| Error::Other(format!("Resolver cache poisoned: {e}")))?
            .put(key, name.clone());
        Ok(name)
    }
}
