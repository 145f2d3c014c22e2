//! Type assignment rows from the `pokemon_types` join table.

use serde::Serialize;
use sqlx::FromRow;
use pokedex_core::types::DbId;

/// A row from the `pokemon_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PokemonType {
    pub id: DbId,
    pub pokemon_id: DbId,
    pub type_id: DbId,
    pub slot: i32,
}
