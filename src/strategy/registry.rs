// Fri Oct 16 2026 - Alex

use crate::curator::{CacheLevel, Curator};
use crate::error::{Error, Result};
use crate::strategy::{
    Annotate, CacheRounding, FalseSharing, FilterPads, Group, Nope, Pad, PadKind, Pipe, SharedStrategy, Sort,
    SortKey, TagMode, Tagger, CACHE_ROUNDING_L1, CACHE_ROUNDING_L2, CACHE_ROUNDING_L3, COMMENT_ANNOTATE,
    FALSE_SHARING_L1, FALSE_SHARING_L2, FALSE_SHARING_L3, FILTER_PADS, MEMORY_PACK, NAME_ASCENDING,
    NAME_DESCENDING, NOPE, PAD_SYSTEM_ALIGNMENT, PAD_TYPE_NATURAL, TAG_FORCE, TAG_FORCE_DISCRETE, TAG_GROUP,
    TAG_SOFT, TAG_SOFT_DISCRETE, TYPE_ASCENDING,
};
use indexmap::IndexMap;
use std::sync::Arc;

pub type Constructor = Arc<dyn Fn(&Builder) -> SharedStrategy + Send + Sync>;

/// Name to constructor table. Registration order is kept so listings are
/// stable.
#[derive(Clone, Default)]
pub struct Registry {
    constructors: IndexMap<String, Constructor>,
}

impl Registry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(NOPE, |_| Arc::new(Nope));
        registry.register(PAD_SYSTEM_ALIGNMENT, |b| {
            Arc::new(Pad::new(PadKind::SystemAlignment, b.curator()))
        });
        registry.register(PAD_TYPE_NATURAL, |b| {
            Arc::new(Pad::new(PadKind::TypeNatural, b.curator()))
        });
        registry.register(FALSE_SHARING_L1, |b| {
            Arc::new(FalseSharing::new(CacheLevel::L1, b.curator()))
        });
        registry.register(FALSE_SHARING_L2, |b| {
            Arc::new(FalseSharing::new(CacheLevel::L2, b.curator()))
        });
        registry.register(FALSE_SHARING_L3, |b| {
            Arc::new(FalseSharing::new(CacheLevel::L3, b.curator()))
        });
        registry.register(CACHE_ROUNDING_L1, |b| {
            Arc::new(CacheRounding::new(CacheLevel::L1, b.curator()))
        });
        registry.register(CACHE_ROUNDING_L2, |b| {
            Arc::new(CacheRounding::new(CacheLevel::L2, b.curator()))
        });
        registry.register(CACHE_ROUNDING_L3, |b| {
            Arc::new(CacheRounding::new(CacheLevel::L3, b.curator()))
        });
        registry.register(MEMORY_PACK, |_| Arc::new(Sort::new(SortKey::SizeDescending)));
        registry.register(NAME_ASCENDING, |_| Arc::new(Sort::new(SortKey::NameAscending)));
        registry.register(NAME_DESCENDING, |_| Arc::new(Sort::new(SortKey::NameDescending)));
        registry.register(TYPE_ASCENDING, |_| Arc::new(Sort::new(SortKey::TypeAscending)));
        registry.register(FILTER_PADS, |_| Arc::new(FilterPads));
        registry.register(COMMENT_ANNOTATE, |_| Arc::new(Annotate));
        registry.register(TAG_SOFT, |b| Arc::new(Tagger::new(b.names(), TagMode::Soft)));
        registry.register(TAG_FORCE, |b| Arc::new(Tagger::new(b.names(), TagMode::Force)));
        registry.register(TAG_SOFT_DISCRETE, |b| {
            Arc::new(Tagger::new(b.names(), TagMode::Soft).discrete())
        });
        registry.register(TAG_FORCE_DISCRETE, |b| {
            Arc::new(Tagger::new(b.names(), TagMode::Force).discrete())
        });
        registry.register(TAG_GROUP, |b| Arc::new(Group::new(b.clone())));
        registry
    }

    /// Adds or replaces the constructor for `name`.
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(&Builder) -> SharedStrategy + Send + Sync + 'static,
    {
        self.constructors.insert(name.to_string(), Arc::new(constructor));
    }

    pub fn get(&self, name: &str) -> Option<&Constructor> {
        self.constructors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

/// Compiles strategy name lists into a single strategy against a shared
/// registry and curator.
#[derive(Clone)]
pub struct Builder {
    registry: Arc<Registry>,
    curator: Arc<dyn Curator>,
    names: Arc<[String]>,
}

impl Builder {
    pub fn new(registry: Arc<Registry>, curator: Arc<dyn Curator>) -> Self {
        Self {
            registry,
            curator,
            names: Arc::from(Vec::new()),
        }
    }

    pub fn standard(curator: Arc<dyn Curator>) -> Self {
        Self::new(Arc::new(Registry::standard()), curator)
    }

    pub fn curator(&self) -> Arc<dyn Curator> {
        Arc::clone(&self.curator)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Full name list of the build in progress, as seen by constructors.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// No names yield the identity strategy, one name yields that strategy
    /// and several yield a pipe in the given order.
    pub fn build<I, S>(&self, names: I) -> Result<SharedStrategy>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|name| name.as_ref().to_string()).collect();
        let scoped = Self {
            names: Arc::from(names.clone()),
            ..self.clone()
        };
        let mut stages = Vec::with_capacity(names.len());
        for name in &names {
            let constructor = self
                .registry
                .get(name)
                .ok_or_else(|| Error::UnknownStrategy(name.clone()))?;
            stages.push(constructor(&scoped));
        }

        log::debug!("Built strategy from {} stage(s)", stages.len());
        match stages.len() {
            0 => Ok(Arc::new(Nope)),
            1 => Ok(stages.remove(0)),
            _ => Ok(Arc::new(Pipe::new(stages))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Context;
    use crate::structure::{pad_field, Field, Structure};
    use crate::utils::testing::MockCurator;

    fn builder() -> Builder {
        Builder::standard(Arc::new(MockCurator::with_sys_align(8)))
    }

    fn sample() -> Structure {
        Structure::new("test")
            .with_field(Field::new("a", "bool", 1, 1))
            .with_field(Field::new("b", "int64", 8, 8))
    }

    #[test]
    fn test_standard_names() {
        let registry = Registry::standard();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.len(), 20);
        assert!(registry.contains(CACHE_ROUNDING_L1));
        assert!(registry.contains(TAG_FORCE));
        assert_eq!(names[0], NOPE);
        assert!(registry.contains(TAG_GROUP));
        assert!(registry.contains(FALSE_SHARING_L3));
    }

    #[test]
    fn test_empty_list_is_identity() {
        let names: [&str; 0] = [];
        let stg = builder().build(&names).unwrap();
        assert_eq!(stg.apply(&Context::background(), &sample()).unwrap(), sample());
    }

    #[test]
    fn test_single_name() {
        let stg = builder().build(&[MEMORY_PACK]).unwrap();
        let r = stg.apply(&Context::background(), &sample()).unwrap();
        assert_eq!(r.fields[0].name, "b");
    }

    #[test]
    fn test_names_compose_in_order() {
        let stg = builder()
            .build(&[MEMORY_PACK.to_string(), PAD_TYPE_NATURAL.to_string()])
            .unwrap();
        let r = stg.apply(&Context::background(), &sample()).unwrap();
        assert_eq!(r.fields.len(), 3);
        assert_eq!(r.fields[2], pad_field(7));

        let stg = builder().build(&[PAD_TYPE_NATURAL, MEMORY_PACK]).unwrap();
        let r = stg.apply(&Context::background(), &sample()).unwrap();
        assert_eq!(r.fields[0].name, "b");
        assert_eq!(r.fields[1], pad_field(7));
    }

    #[test]
    fn test_unknown_name() {
        match builder().build(&[NOPE, "bogus"]) {
            Err(Error::UnknownStrategy(name)) => assert_eq!(name, "bogus"),
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("unknown strategy was built"),
        }
    }

    #[test]
    fn test_constructors_see_build_names() {
        let mut registry = Registry::standard();
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        registry.register("record", move |b| {
            sink.lock().extend(b.names().iter().cloned());
            Arc::new(Nope)
        });
        let builder = Builder::new(Arc::new(registry), Arc::new(MockCurator::default()));
        builder.build(&[MEMORY_PACK, "record"]).unwrap();
        assert_eq!(*seen.lock(), vec![MEMORY_PACK.to_string(), "record".to_string()]);
        assert!(builder.names().is_empty());
    }

    #[test]
    fn test_custom_registration_overrides() {
        let mut registry = Registry::standard();
        registry.register(MEMORY_PACK, |_| Arc::new(Nope));
        let builder = Builder::new(Arc::new(registry), Arc::new(MockCurator::default()));
        let stg = builder.build(&[MEMORY_PACK]).unwrap();
        assert_eq!(stg.apply(&Context::background(), &sample()).unwrap(), sample());
    }
}
