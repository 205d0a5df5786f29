/// Base terrain of a map cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    /// Grassland, plains, desert.
    #[default]
    Flat,
    /// Hills, forest, jungle.
    Rough,
    /// Lakes and coast. Land units cannot enter.
    Water,
}

impl TerrainKind {
    /// Movement points a land unit spends to enter this terrain, or `None`
    /// if it cannot be entered at all.
    pub fn entry_cost(self) -> Option<f32> {
        match self {
            TerrainKind::Flat => Some(1.0),
            TerrainKind::Rough => Some(2.0),
            TerrainKind::Water => None,
        }
    }

    pub fn is_passable(self) -> bool {
        self.entry_cost().is_some()
    }
}
