use std::sync::Arc;

use crate::usecase::catalog::Catalog;
use crate::usecase::ports::source::TableSource;

pub struct InventoryService {
    source: Arc<dyn TableSource>,
}

impl InventoryService {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self { source }
    }

    /// Acquires the table and builds a fresh catalog. Acquisition failures are
    /// logged and yield an empty catalog.
    pub fn load_catalog(&self) -> Catalog {
        match self.source.load() {
            Ok(table) => {
                let catalog = Catalog::from_table(&table);
                log::debug!(
                    "loaded {} records from {}",
                    catalog.len(),
                    self.source.describe()
                );
                catalog
            }
            Err(err) => {
                log::warn!("failed to load {}: {err}", self.source.describe());
                Catalog::empty()
            }
        }
    }
}
