//! Repository for the `pokemon_species` table.
//!
//! Species rows are written only as part of a pokemon create or update, so
//! the write methods take the caller's open transaction.

use sqlx::PgPool;
use pokedex_core::types::DbId;

use crate::models::pokemon::PokemonRequest;
use crate::models::species::PokemonSpecies;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, identifier, generation_id, evolves_from_species_id, \
    evolution_chain_id, color_id, shape_id, habitat_id, gender_rate, capture_rate, \
    base_happiness, is_baby, hatch_counter, has_gender_differences, growth_rate_id, \
    forms_switchable, \"order\", conquest_order";

/// Provides species reads and the species half of pokemon writes.
pub struct SpeciesRepo;

impl SpeciesRepo {
    /// Insert a species from the request's catalogue fields, returning the created row.
    pub async fn create(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &PokemonRequest,
    ) -> Result<PokemonSpecies, sqlx::Error> {
        let query = format!(
            "INSERT INTO pokemon_species \
                (identifier, generation_id, evolves_from_species_id, evolution_chain_id, \
                 color_id, shape_id, habitat_id, gender_rate, capture_rate, base_happiness, \
                 is_baby, hatch_counter, has_gender_differences, growth_rate_id, \
                 forms_switchable, \"order\", conquest_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokemonSpecies>(&query)
            .bind(&input.identifier)
            .bind(input.generation_id)
            .bind(input.evolves_from_species_id)
            .bind(input.evolution_chain_id)
            .bind(input.color_id)
            .bind(input.shape_id)
            .bind(input.habitat_id)
            .bind(input.gender_rate)
            .bind(input.capture_rate)
            .bind(input.base_happiness)
            .bind(input.is_baby)
            .bind(input.hatch_counter)
            .bind(input.has_gender_differences)
            .bind(input.growth_rate_id)
            .bind(input.forms_switchable)
            .bind(input.order)
            .bind(input.conquest_order)
            .fetch_one(&mut **tx)
            .await
    }

    /// Overwrite the species with every non-`None` catalogue field of `input`.
    ///
    /// `None` leaves the stored value untouched, so a column can never be
    /// cleared through this path. The identifier is always present and always
    /// written.
    pub async fn apply_partial(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        input: &PokemonRequest,
    ) -> Result<PokemonSpecies, sqlx::Error> {
        let query = format!(
            "UPDATE pokemon_species SET
                identifier = $2,
                generation_id = COALESCE($3, generation_id),
                evolves_from_species_id = COALESCE($4, evolves_from_species_id),
                evolution_chain_id = COALESCE($5, evolution_chain_id),
                color_id = COALESCE($6, color_id),
                shape_id = COALESCE($7, shape_id),
                habitat_id = COALESCE($8, habitat_id),
                gender_rate = COALESCE($9, gender_rate),
                capture_rate = COALESCE($10, capture_rate),
                base_happiness = COALESCE($11, base_happiness),
                is_baby = COALESCE($12, is_baby),
                hatch_counter = COALESCE($13, hatch_counter),
                has_gender_differences = COALESCE($14, has_gender_differences),
                growth_rate_id = COALESCE($15, growth_rate_id),
                forms_switchable = COALESCE($16, forms_switchable),
                \"order\" = COALESCE($17, \"order\"),
                conquest_order = COALESCE($18, conquest_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PokemonSpecies>(&query)
            .bind(id)
            .bind(&input.identifier)
            .bind(input.generation_id)
            .bind(input.evolves_from_species_id)
            .bind(input.evolution_chain_id)
            .bind(input.color_id)
            .bind(input.shape_id)
            .bind(input.habitat_id)
            .bind(input.gender_rate)
            .bind(input.capture_rate)
            .bind(input.base_happiness)
            .bind(input.is_baby)
            .bind(input.hatch_counter)
            .bind(input.has_gender_differences)
            .bind(input.growth_rate_id)
            .bind(input.forms_switchable)
            .bind(input.order)
            .bind(input.conquest_order)
            .fetch_one(&mut **tx)
            .await
    }

    /// Find a species by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PokemonSpecies>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon_species WHERE id = $1");
        sqlx::query_as::<_, PokemonSpecies>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
