//! Read-only lookup tables referenced by species rows.

/// Lookup tables whose `identifier` is resolved for display on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    Color,
    Shape,
}

impl LookupTable {
    pub fn table_name(self) -> &'static str {
        match self {
            LookupTable::Color => "pokemon_colors",
            LookupTable::Shape => "pokemon_shapes",
        }
    }
}
