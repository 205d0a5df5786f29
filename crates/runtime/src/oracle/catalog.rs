//! Unit-type catalog implementing [`unit_core::UnitCatalog`].

use std::collections::BTreeMap;

use unit_core::{UnitCatalog, UnitType};

/// Oracle providing unit types by name.
#[derive(Clone, Debug, Default)]
pub struct CatalogOracleImpl {
    types: BTreeMap<String, UnitType>,
}

impl CatalogOracleImpl {
    pub fn new(types: impl IntoIterator<Item = UnitType>) -> Self {
        let types = types
            .into_iter()
            .map(|unit_type| (unit_type.name.clone(), unit_type))
            .collect();
        Self { types }
    }
}

impl UnitCatalog for CatalogOracleImpl {
    fn unit_type(&self, name: &str) -> Option<&UnitType> {
        self.types.get(name)
    }
}
