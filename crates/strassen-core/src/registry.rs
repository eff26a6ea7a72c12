//! Multiplier factory and registry.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::constants::{MULTIPLIER_NAMES, NAIVE, RECURSIVE, STRASSEN};
use crate::element::Element;
use crate::error::MatmulError;
use crate::naive::NaiveMultiplier;
use crate::options::Options;
use crate::recursive::RecursiveMultiplier;
use crate::strassen::StrassenMultiplier;
use crate::strategy::Multiplier;

/// Factory trait for creating multipliers.
pub trait MultiplierFactory<T: Element>: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatmulError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory<T: Element> {
    options: Options,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier<T>>>>,
}

impl<T: Element> DefaultFactory<T> {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a factory whose divide-and-conquer multipliers use `options`.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options: options.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatmulError> {
        debug!(name, "creating multiplier");
        match name {
            NAIVE => Ok(Arc::new(NaiveMultiplier::new())),
            RECURSIVE => Ok(Arc::new(RecursiveMultiplier::with_options(self.options))),
            STRASSEN => Ok(Arc::new(StrassenMultiplier::with_options(self.options))),
            _ => Err(MatmulError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl<T: Element> Default for DefaultFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> MultiplierFactory<T> for DefaultFactory<T> {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier<T>>, MatmulError> {
        // Check cache first
        if let Some(multiplier) = self.cache.read().get(name) {
            return Ok(Arc::clone(multiplier));
        }

        // Another thread may have filled the slot between the two locks
        match self.cache.write().entry(name.to_string()) {
            Entry::Occupied(slot) => Ok(Arc::clone(slot.get())),
            Entry::Vacant(slot) => {
                let multiplier = self.create_multiplier(name)?;
                Ok(Arc::clone(slot.insert(multiplier)))
            }
        }
    }

    fn available(&self) -> Vec<&str> {
        MULTIPLIER_NAMES.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_types::Matrix;

    #[test]
    fn factory_creates_each_multiplier() {
        let factory = DefaultFactory::<i64>::new();
        assert_eq!(factory.get("naive").unwrap().name(), "Naive");
        assert_eq!(factory.get("recursive").unwrap().name(), "Recursive");
        assert_eq!(factory.get("strassen").unwrap().name(), "Strassen");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::<i64>::new();
        let m1 = factory.get("strassen").unwrap();
        let m2 = factory.get("strassen").unwrap();
        assert!(Arc::ptr_eq(&m1, &m2));
    }

    #[test]
    fn concurrent_gets_share_one_instance() {
        let factory = DefaultFactory::<i64>::new();
        let shared = &factory;
        let instances: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(move || shared.get("recursive").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for instance in &instances[1..] {
            assert!(Arc::ptr_eq(&instances[0], instance));
        }
        assert!(Arc::ptr_eq(&instances[0], &factory.get("recursive").unwrap()));
    }

    #[test]
    fn unknown_name_is_not_cached() {
        let factory = DefaultFactory::<i64>::new();
        assert!(factory.get("winograd").is_err());
        assert!(factory.cache.read().is_empty());
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::<i64>::new();
        let err = factory.get("winograd").err().unwrap();
        assert_eq!(err, MatmulError::Config("unknown multiplier: winograd".into()));
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::<f64>::new();
        assert_eq!(factory.available(), vec!["naive", "recursive", "strassen"]);
    }

    #[test]
    fn created_multipliers_agree() {
        let factory = DefaultFactory::<i32>::with_options(Options {
            parallel_threshold: 4,
        });
        let a = Matrix::from_fn(8, |i, j| (i as i32) * 2 - (j as i32)).unwrap();
        let results: Vec<_> = factory
            .available()
            .into_iter()
            .map(|name| factory.get(name).unwrap().multiply(&a, &a).unwrap())
            .collect();
        assert_eq!(results[0], results[1]);
        assert_eq!(results[0], results[2]);
    }
}
