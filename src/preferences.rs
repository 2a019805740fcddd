//! Persisted UI preferences and the local SKU generator.

use crate::error::SkuError;
use crate::observable::{Observable, Subscription};
use crate::storage::{KeyValueStore, keys, read_json, write_json};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct Preferences {
    storage: Rc<dyn KeyValueStore>,
    theme: Observable<Theme>,
}

impl Preferences {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let theme = storage
            .get(keys::THEME)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();
        Self {
            storage,
            theme: Observable::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        if let Err(e) = self.storage.set(keys::THEME, theme.as_str()) {
            warn!("Failed to persist theme: {}", e);
        }
        self.theme.set(theme);
    }

    pub fn toggle_theme(&self) -> Theme {
        let theme = self.theme().toggled();
        self.set_theme(theme);
        theme
    }

    pub fn subscribe(&self, listener: impl Fn(&Theme) + 'static) -> Subscription {
        self.theme.subscribe(listener)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkuPrefix {
    /// Inventory items
    Inventory,
    /// Receiving reports
    ReceivingReport,
}

impl SkuPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkuPrefix::Inventory => "INV",
            SkuPrefix::ReceivingReport => "RR",
        }
    }
}

const SKU_MIN: u32 = 1000;
const SKU_MAX: u32 = 9999;

/// Hands out `PREFIX-NNNN` codes that were never handed out before on this
/// device. Issued codes persist under [`keys::USED_SKUS`].
pub struct SkuRegistry {
    storage: Rc<dyn KeyValueStore>,
}

impl SkuRegistry {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn used(&self) -> BTreeSet<String> {
        read_json(self.storage.as_ref(), keys::USED_SKUS).unwrap_or_default()
    }

    pub fn generate(&self, prefix: SkuPrefix) -> Result<String, SkuError> {
        self.generate_with(prefix, &mut rand::thread_rng())
    }

    pub fn generate_with<G: Rng + ?Sized>(
        &self,
        prefix: SkuPrefix,
        rng: &mut G,
    ) -> Result<String, SkuError> {
        let mut used = self.used();
        let marker = format!("{}-", prefix.as_str());
        let taken = used.iter().filter(|sku| sku.starts_with(&marker)).count();
        if taken >= (SKU_MAX - SKU_MIN + 1) as usize {
            return Err(SkuError::Exhausted(prefix.as_str()));
        }

        let sku = loop {
            let candidate = format!("{}{}", marker, rng.gen_range(SKU_MIN..=SKU_MAX));
            if !used.contains(&candidate) {
                break candidate;
            }
        };

        used.insert(sku.clone());
        write_json(self.storage.as_ref(), keys::USED_SKUS, &used)?;
        debug!("Generated SKU {}", sku);
        Ok(sku)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_theme_persists_and_toggles() {
        let storage = Rc::new(MemoryStore::new());
        let preferences = Preferences::new(storage.clone());
        assert_eq!(preferences.theme(), Theme::Light);

        assert_eq!(preferences.toggle_theme(), Theme::Dark);
        assert_eq!(storage.get(keys::THEME).as_deref(), Some("dark"));
        assert_eq!(Preferences::new(storage).theme(), Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        let storage = Rc::new(MemoryStore::with_entries([(keys::THEME, "sepia")]));
        assert_eq!(Preferences::new(storage).theme(), Theme::Light);
    }

    #[test]
    fn test_skus_are_unique_and_persisted() {
        let storage = Rc::new(MemoryStore::new());
        let registry = SkuRegistry::new(storage.clone());
        let mut rng = StdRng::seed_from_u64(7);

        let mut issued = BTreeSet::new();
        for _ in 0..50 {
            let sku = registry
                .generate_with(SkuPrefix::Inventory, &mut rng)
                .unwrap();
            assert!(sku.starts_with("INV-"));
            let number: u32 = sku[4..].parse().unwrap();
            assert!((1000..=9999).contains(&number));
            assert!(issued.insert(sku));
        }

        let rr = registry.generate(SkuPrefix::ReceivingReport).unwrap();
        assert!(rr.starts_with("RR-"));

        let stored = SkuRegistry::new(storage).used();
        assert_eq!(stored.len(), 51);
    }

    #[test]
    fn test_exhausted_prefix_is_an_error() {
        let all: BTreeSet<String> = (1000..=9999).map(|n| format!("RR-{}", n)).collect();
        let storage = Rc::new(MemoryStore::new());
        write_json(storage.as_ref(), keys::USED_SKUS, &all).unwrap();

        let registry = SkuRegistry::new(storage);
        assert!(matches!(
            registry.generate(SkuPrefix::ReceivingReport),
            Err(SkuError::Exhausted("RR"))
        ));
        assert!(registry.generate(SkuPrefix::Inventory).is_ok());
    }
}
