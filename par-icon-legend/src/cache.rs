//! Load-once legend cache with per-context font registration.
//!
//! Legends are keyed by specifier, not by icon key: a cache holds at most
//! one legend per font family ever used and never evicts it.
//!
//! Concurrency: the outer map lock is only held to fetch the per-specifier
//! slot. The slot lock is held across the source read, so concurrent first
//! users of one specifier wait for a single read while other specifiers load
//! in parallel. A failed read removes its slot again, so unknown specifiers
//! do not accumulate. Lock order is slot, then map.
//!
//! Registration records are kept per host context until the host calls
//! [`LegendCache::forget_context`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use par_icon_config::IconConfig;
use parking_lot::Mutex;
use serde::Serialize;

use crate::error::LegendError;
use crate::legend::Legend;
use crate::source::{LegendSource, LegendSources};
use crate::specifier::{FontSpecifier, KeyParts, SpecifierRegistry};

/// Identity of a host rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub u64);

impl ContextId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Host capability to register a font file for later text rendering.
pub trait FontRegistrar {
    fn context_id(&self) -> ContextId;

    /// Make the font at `path` available under the specifier's name.
    ///
    /// Called with no cache lock held. Another thread sharing the context can
    /// see the pair as registered before this call returns.
    fn register_font(&self, specifier: &FontSpecifier, path: &Path);
}

/// Result of resolving one icon key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIcon {
    pub specifier: FontSpecifier,
    pub base_key: String,
    pub codepoint: char,
}

impl fmt::Display for ResolvedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} U+{:04X}",
            self.specifier, self.base_key, self.codepoint as u32
        )
    }
}

type LegendSlot = Arc<Mutex<Option<Arc<Legend>>>>;

/// Thread-safe cache of legends keyed by specifier.
pub struct LegendCache {
    registry: SpecifierRegistry,
    source: Box<dyn LegendSource>,
    legends: Mutex<HashMap<FontSpecifier, LegendSlot>>,
    /// (context, specifier) pairs whose font has been registered
    registered: Mutex<HashSet<(ContextId, FontSpecifier)>>,
}

impl fmt::Debug for LegendCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegendCache")
            .field("registry", &self.registry)
            .field("loaded", &self.loaded_specifiers())
            .finish()
    }
}

impl LegendCache {
    /// Create a cache over a registry and a legend source.
    ///
    /// Families the source provides are added to the registry so their
    /// prefixes are recognized in keys.
    pub fn new(mut registry: SpecifierRegistry, source: impl LegendSource + 'static) -> Self {
        for specifier in source.specifiers() {
            if registry.insert(specifier.clone()) {
                log::debug!("Discovered icon font '{}'", specifier);
            }
        }

        Self {
            registry,
            source: Box::new(source),
            legends: Mutex::new(HashMap::new()),
            registered: Mutex::new(HashSet::new()),
        }
    }

    /// Build a cache from configuration (registry and source chain).
    pub fn from_config(config: &IconConfig) -> Self {
        Self::new(
            SpecifierRegistry::from_config(config),
            LegendSources::from_config(config),
        )
    }

    pub fn registry(&self) -> &SpecifierRegistry {
        &self.registry
    }

    pub fn known_specifiers(&self) -> Vec<FontSpecifier> {
        self.registry.iter().cloned().collect()
    }

    /// See [`SpecifierRegistry::specifier_from_key`].
    pub fn specifier_from_key(&self, key: &str) -> Result<KeyParts, LegendError> {
        self.registry.specifier_from_key(key)
    }

    /// Get the legend for a specifier, reading it on first use.
    ///
    /// Also registers the legend's font file (if it has one) with `context`,
    /// once per (context, specifier) pair.
    ///
    /// A failed read leaves nothing behind; the next call reads again.
    ///
    /// # Errors
    ///
    /// Returns [`LegendError::FontNotFound`] if no source has the specifier,
    /// or the source's read error.
    pub fn load<R>(&self, context: &R, specifier: &FontSpecifier) -> Result<Arc<Legend>, LegendError>
    where
        R: FontRegistrar + ?Sized,
    {
        let legend = loop {
            let slot = {
                let mut legends = self.legends.lock();
                Arc::clone(legends.entry(specifier.clone()).or_default())
            };

            let mut cached = slot.lock();
            if let Some(legend) = cached.as_ref() {
                log::debug!("Legend cache hit for '{}'", specifier);
                break Arc::clone(legend);
            }

            // A failed read may have dropped this slot while we waited on it
            if !self.is_current_slot(specifier, &slot) {
                continue;
            }

            match self.source.read(specifier) {
                Ok(legend) => {
                    let legend = Arc::new(legend);
                    log::info!(
                        "Loaded legend '{}' ({} icons, version {})",
                        specifier,
                        legend.len(),
                        legend.version().unwrap_or("unknown")
                    );
                    *cached = Some(Arc::clone(&legend));
                    break legend;
                }
                Err(e) => {
                    // Still holding the empty slot: nobody can fill it first
                    let mut legends = self.legends.lock();
                    if legends
                        .get(specifier)
                        .is_some_and(|current| Arc::ptr_eq(current, &slot))
                    {
                        legends.remove(specifier);
                    }
                    return Err(e);
                }
            }
        };

        self.register(context, &legend);
        Ok(legend)
    }

    /// The cached legend for a specifier, without loading it.
    pub fn cached(&self, specifier: &FontSpecifier) -> Option<Arc<Legend>> {
        let slot = self.legends.lock().get(specifier).cloned()?;
        slot.lock().clone()
    }

    /// Specifiers whose legend has been loaded, sorted.
    pub fn loaded_specifiers(&self) -> Vec<FontSpecifier> {
        let slots: Vec<(FontSpecifier, LegendSlot)> = self
            .legends
            .lock()
            .iter()
            .map(|(specifier, slot)| (specifier.clone(), Arc::clone(slot)))
            .collect();
        let mut loaded: Vec<FontSpecifier> = slots
            .into_iter()
            .filter(|(_, slot)| slot.lock().is_some())
            .map(|(specifier, _)| specifier)
            .collect();
        loaded.sort();
        loaded
    }

    /// Drop the registration records of a host context.
    ///
    /// Hosts call this when they dispose of a context; a later load with the
    /// same id registers its fonts again.
    pub fn forget_context(&self, context: ContextId) {
        let mut registered = self.registered.lock();
        let before = registered.len();
        registered.retain(|(id, _)| *id != context);
        log::debug!(
            "Forgot {} font registration(s) for context {:?}",
            before - registered.len(),
            context
        );
    }

    /// Resolve a key to its specifier and codepoint.
    ///
    /// With `explicit` set, that specifier is authoritative and its prefix is
    /// stripped from the key; otherwise the specifier is inferred from the
    /// key prefix.
    pub fn resolve<R>(
        &self,
        context: &R,
        key: &str,
        explicit: Option<&FontSpecifier>,
    ) -> Result<ResolvedIcon, LegendError>
    where
        R: FontRegistrar + ?Sized,
    {
        let KeyParts {
            specifier,
            base_key,
        } = match explicit {
            Some(specifier) => self.registry.with_explicit(key, specifier)?,
            None => self.registry.specifier_from_key(key)?,
        };

        let legend = self.load(context, &specifier)?;
        let codepoint = legend.unicode(&base_key)?;
        log::trace!("Resolved '{}' to U+{:04X}", key, codepoint as u32);

        Ok(ResolvedIcon {
            specifier,
            base_key,
            codepoint,
        })
    }

    fn register<R>(&self, context: &R, legend: &Legend)
    where
        R: FontRegistrar + ?Sized,
    {
        let Some(path) = legend.font_path() else {
            return;
        };

        let pair = (context.context_id(), legend.specifier().clone());
        if !self.registered.lock().insert(pair) {
            return;
        }

        // Lock released: the host may resolve icons from inside register_font
        log::info!(
            "Registering font '{}' from {} with context {:?}",
            legend.specifier(),
            path.display(),
            context.context_id()
        );
        context.register_font(legend.specifier(), path);
    }

    /// Whether `slot` is still the map entry for `specifier`.
    fn is_current_slot(&self, specifier: &FontSpecifier, slot: &LegendSlot) -> bool {
        self.legends
            .lock()
            .get(specifier)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
    }
}

impl Default for LegendCache {
    fn default() -> Self {
        Self::from_config(&IconConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Headless(ContextId);

    impl FontRegistrar for Headless {
        fn context_id(&self) -> ContextId {
            self.0
        }

        fn register_font(&self, _specifier: &FontSpecifier, _path: &Path) {}
    }

    #[test]
    fn test_context_ids_unique() {
        assert_ne!(ContextId::next(), ContextId::next());
    }

    #[test]
    fn test_default_cache_resolves_bundled_fa() {
        let cache = LegendCache::default();
        let ctx = Headless(ContextId::next());
        let icon = cache.resolve(&ctx, "fa-beer", None).unwrap();
        assert_eq!(icon.specifier.as_str(), "fa");
        assert_eq!(icon.base_key, "beer");
        assert_eq!(icon.codepoint, '\u{f0fc}');
        assert_eq!(icon.to_string(), "fa-beer U+F0FC");
    }

    #[test]
    fn test_cached_before_and_after_load() {
        let cache = LegendCache::default();
        let fa = FontSpecifier::from("fa");
        assert!(cache.cached(&fa).is_none());
        assert!(cache.loaded_specifiers().is_empty());

        let loaded = cache.load(&Headless(ContextId::next()), &fa).unwrap();
        let cached = cache.cached(&fa).unwrap();
        assert!(Arc::ptr_eq(&loaded, &cached));
        assert_eq!(cache.loaded_specifiers(), vec![fa]);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache = LegendCache::default();
        let missing = FontSpecifier::from("missing");
        let result = cache.load(&Headless(ContextId::next()), &missing);
        assert!(matches!(result, Err(LegendError::FontNotFound(_))));
        assert!(cache.cached(&missing).is_none());
        assert!(cache.loaded_specifiers().is_empty());
    }

    #[test]
    fn test_explicit_specifier_used() {
        let cache = LegendCache::default();
        let fa = FontSpecifier::from("fa");
        let icon = cache
            .resolve(&Headless(ContextId::next()), "beer", Some(&fa))
            .unwrap();
        assert_eq!(icon.codepoint, '\u{f0fc}');
    }

    #[test]
    fn test_failed_loads_leave_no_slots() {
        let cache = LegendCache::default();
        let ctx = Headless(ContextId::next());
        cache.resolve(&ctx, "fa-beer", None).unwrap();

        for i in 0..100 {
            let missing = FontSpecifier::new(format!("nope{i}"));
            assert!(cache.resolve(&ctx, "beer", Some(&missing)).is_err());
        }

        assert_eq!(cache.legends.lock().len(), 1);
        assert_eq!(cache.loaded_specifiers(), vec![FontSpecifier::from("fa")]);
    }

    #[test]
    fn test_forget_context_drops_only_its_records() {
        let cache = LegendCache::default();
        let fa = FontSpecifier::from("fa");
        let (first, second) = (ContextId::next(), ContextId::next());
        cache.registered.lock().insert((first, fa.clone()));
        cache.registered.lock().insert((second, fa.clone()));

        cache.forget_context(first);

        let registered = cache.registered.lock();
        assert_eq!(registered.len(), 1);
        assert!(registered.contains(&(second, fa)));
    }
}
