//! Species row model.

use serde::Serialize;
use sqlx::FromRow;
use pokedex_core::types::DbId;

/// A row from the `pokemon_species` table. Everything past `identifier` is nullable.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PokemonSpecies {
    pub id: DbId,
    pub identifier: String,
    pub generation_id: Option<i32>,
    pub evolves_from_species_id: Option<i32>,
    pub evolution_chain_id: Option<i32>,
    pub color_id: Option<DbId>,
    pub shape_id: Option<DbId>,
    pub habitat_id: Option<i32>,
    pub gender_rate: Option<i32>,
    pub capture_rate: Option<i32>,
    pub base_happiness: Option<i32>,
    pub is_baby: Option<bool>,
    pub hatch_counter: Option<i32>,
    pub has_gender_differences: Option<bool>,
    pub growth_rate_id: Option<i32>,
    pub forms_switchable: Option<bool>,
    pub order: Option<i32>,
    pub conquest_order: Option<i32>,
}
