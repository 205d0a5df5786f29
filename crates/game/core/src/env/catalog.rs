use super::OracleError;

/// Immutable stats of a unit type as declared by game content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitType {
    pub name: String,
    /// Movement allowance per turn.
    pub movement: u32,
    /// Capability tags ("uniques"), e.g. `"Can build improvements"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub uniques: Vec<String>,
}

impl UnitType {
    pub fn new(name: impl Into<String>, movement: u32) -> Self {
        Self {
            name: name.into(),
            movement,
            uniques: Vec::new(),
        }
    }

    pub fn with_unique(mut self, unique: impl Into<String>) -> Self {
        self.uniques.push(unique.into());
        self
    }

    pub fn has_unique(&self, unique: &str) -> bool {
        self.uniques.iter().any(|declared| declared == unique)
    }
}

/// Static unit-type catalog keyed by type name.
pub trait UnitCatalog: Send + Sync {
    fn unit_type(&self, name: &str) -> Option<&UnitType>;

    /// Like [`unit_type`](Self::unit_type), treating absence as a content error.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownUnitType` if the type is not declared.
    fn require(&self, name: &str) -> Result<&UnitType, OracleError> {
        self.unit_type(name)
            .ok_or_else(|| OracleError::UnknownUnitType(name.to_string()))
    }
}
