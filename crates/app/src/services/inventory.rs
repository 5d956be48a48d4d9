//! Inventory — a snapshot of every accessory in a registry.

use hubkit_domain::capability::CapabilityCategory;
use hubkit_domain::id::AccessoryId;
use serde::Serialize;

use crate::accessory::{Accessory, AccessorySnapshot};
use crate::ports::HubClient;
use crate::services::registry::Registry;

/// What one discovery cycle found, with the current values of each accessory.
#[derive(Debug, Serialize)]
pub struct Inventory {
    pub location: serde_json::Value,
    pub skipped: usize,
    pub accessories: Vec<InventoryEntry>,
}

/// Outcome of reading one accessory.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum InventoryEntry {
    Read(AccessorySnapshot),
    Failed {
        id: AccessoryId,
        name: String,
        category: CapabilityCategory,
        error: String,
    },
}

impl InventoryEntry {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl Inventory {
    /// Snapshot every accessory in `registry`, one after the other.
    ///
    /// A failing accessory is reported as [`InventoryEntry::Failed`] and does
    /// not stop the others from being read.
    #[tracing::instrument(skip_all, fields(accessories = registry.len()))]
    pub async fn collect<C: HubClient>(registry: &Registry<C>) -> Self {
        let mut accessories = Vec::with_capacity(registry.len());
        for accessory in registry.accessories() {
            accessories.push(Self::entry(accessory).await);
        }
        Self {
            location: registry.location().clone(),
            skipped: registry.skipped(),
            accessories,
        }
    }

    async fn entry<C: HubClient>(accessory: &Accessory<C>) -> InventoryEntry {
        match accessory.snapshot().await {
            Ok(snapshot) => InventoryEntry::Read(snapshot),
            Err(err) => {
                tracing::warn!(device = %accessory.name(), error = %err.report(), "failed to read accessory");
                InventoryEntry::Failed {
                    id: accessory.id(),
                    name: accessory.name().to_string(),
                    category: accessory.category(),
                    error: err.report(),
                }
            }
        }
    }

    #[must_use]
    pub fn failures(&self) -> usize {
        self.accessories
            .iter()
            .filter(|entry| entry.is_failed())
            .count()
    }
}
