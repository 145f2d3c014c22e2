//! Pokemon entity model and wire DTOs.
//!
//! A single wire object spans two rows: `pokemon` (height, weight, base
//! experience, default flag) and its owned `pokemon_species` row (name and
//! every catalogue attribute). Lookup ids on the species are resolved to their
//! display identifiers on read.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use pokedex_core::types::DbId;

use crate::models::species::PokemonSpecies;

/// A row from the `pokemon` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Pokemon {
    pub id: DbId,
    pub identifier: String,
    pub species_id: DbId,
    pub height: i32,
    pub weight: i32,
    pub base_experience: i32,
    pub order: i32,
    pub is_default: bool,
}

/// Request body for both create and update.
///
/// On update, `None` species attributes leave the stored value untouched
/// while the pokemon fields (`identifier`, `height`, `weight`,
/// `base_experience`, `order`, `is_default`) are always overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRequest {
    /// Accepted for compatibility with clients that echo the object back; ignored.
    pub id: Option<DbId>,
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
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub base_experience: i32,
    #[serde(default = "default_is_default")]
    pub is_default: bool,
}

fn default_is_default() -> bool {
    true
}

impl PokemonRequest {
    /// Value written to the non-nullable `pokemon.order` column.
    ///
    /// The species keeps the nullable original; the pokemon row falls back to
    /// the column default of 0.
    pub fn pokemon_order(&self) -> i32 {
        self.order.unwrap_or(0)
    }
}

/// Wire representation of a pokemon.
///
/// `shape_id` carries the shape's identifier string, not its numeric id. The
/// name is kept for compatibility with existing consumers.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PokemonResponse {
    pub id: DbId,
    pub identifier: String,
    pub generation_id: Option<i32>,
    pub evolves_from_species_id: Option<i32>,
    pub evolution_chain_id: Option<i32>,
    pub color: Option<String>,
    pub shape_id: Option<String>,
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
    pub height: i32,
    pub weight: i32,
    pub base_experience: i32,
    pub is_default: bool,
}

impl PokemonResponse {
    /// Assemble the wire object from an in-memory row pair.
    ///
    /// Catalogue attributes (including `identifier` and `order`) come from the
    /// species; physical attributes and the default flag come from the pokemon.
    pub fn from_rows(
        pokemon: &Pokemon,
        species: &PokemonSpecies,
        color: Option<String>,
        shape: Option<String>,
    ) -> Self {
        Self {
            id: pokemon.id,
            identifier: species.identifier.clone(),
            generation_id: species.generation_id,
            evolves_from_species_id: species.evolves_from_species_id,
            evolution_chain_id: species.evolution_chain_id,
            color,
            shape_id: shape,
            habitat_id: species.habitat_id,
            gender_rate: species.gender_rate,
            capture_rate: species.capture_rate,
            base_happiness: species.base_happiness,
            is_baby: species.is_baby,
            hatch_counter: species.hatch_counter,
            has_gender_differences: species.has_gender_differences,
            growth_rate_id: species.growth_rate_id,
            forms_switchable: species.forms_switchable,
            order: species.order,
            conquest_order: species.conquest_order,
            height: pokemon.height,
            weight: pokemon.weight,
            base_experience: pokemon.base_experience,
            is_default: pokemon.is_default,
        }
    }
}
