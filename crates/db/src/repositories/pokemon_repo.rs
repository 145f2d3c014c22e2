//! Repository for the `pokemon` table and its owned species.
//!
//! Reads go through a single joined query that produces the wire shape
//! directly. Writes touch both `pokemon_species` and `pokemon` inside one
//! transaction.

use sqlx::PgPool;
use pokedex_core::pagination::{PageRequest, Paginated};
use pokedex_core::types::DbId;

use crate::models::lookup::LookupTable;
use crate::models::pokemon::{Pokemon, PokemonRequest, PokemonResponse};
use crate::repositories::{LookupRepo, PokemonTypeRepo, SpeciesRepo};

/// Column list for the `pokemon` table.
const COLUMNS: &str =
    "id, identifier, species_id, height, weight, base_experience, \"order\", is_default";

/// Joined select yielding one [`PokemonResponse`] per pokemon.
///
/// Catalogue fields are taken from the species, lookup ids are resolved to
/// their identifiers (the shape identifier lands in `shape_id`).
const RESPONSE_SELECT: &str = "SELECT p.id, s.identifier, s.generation_id, \
    s.evolves_from_species_id, s.evolution_chain_id, c.identifier AS color, \
    sh.identifier AS shape_id, s.habitat_id, s.gender_rate, s.capture_rate, \
    s.base_happiness, s.is_baby, s.hatch_counter, s.has_gender_differences, \
    s.growth_rate_id, s.forms_switchable, s.\"order\", s.conquest_order, \
    p.height, p.weight, p.base_experience, p.is_default \
    FROM pokemon p \
    JOIN pokemon_species s ON s.id = p.species_id \
    LEFT JOIN pokemon_colors c ON c.id = s.color_id \
    LEFT JOIN pokemon_shapes sh ON sh.id = s.shape_id";

/// Provides paginated listing and CRUD for pokemon.
pub struct PokemonRepo;

impl PokemonRepo {
    /// Count all pokemon rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pokemon")
            .fetch_one(pool)
            .await
    }

    /// Return one page of pokemon ordered by id, with the total row count.
    pub async fn list_page(
        pool: &PgPool,
        page: PageRequest,
    ) -> Result<Paginated<PokemonResponse>, sqlx::Error> {
        let total = Self::count(pool).await?;

        let query = format!("{RESPONSE_SELECT} ORDER BY p.id LIMIT $1 OFFSET $2");
        let items = sqlx::query_as::<_, PokemonResponse>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    /// Find a pokemon by its internal ID, mapped to the wire shape.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PokemonResponse>, sqlx::Error> {
        let query = format!("{RESPONSE_SELECT} WHERE p.id = $1");
        sqlx::query_as::<_, PokemonResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a species and a pokemon referencing it, in one transaction.
    ///
    /// The committed pair is read back through [`Self::find_by_id`] so the
    /// result matches what a later lookup returns.
    pub async fn create(
        pool: &PgPool,
        input: &PokemonRequest,
    ) -> Result<PokemonResponse, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let species = SpeciesRepo::create(&mut tx, input).await?;

        let insert_query = format!(
            "INSERT INTO pokemon \
                (identifier, species_id, height, weight, base_experience, \"order\", is_default) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let pokemon = sqlx::query_as::<_, Pokemon>(&insert_query)
            .bind(&input.identifier)
            .bind(species.id)
            .bind(input.height)
            .bind(input.weight)
            .bind(input.base_experience)
            .bind(input.pokemon_order())
            .bind(input.is_default)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Self::find_by_id(pool, pokemon.id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a pokemon and its species.
    ///
    /// Species catalogue fields follow partial-update rules (see
    /// [`SpeciesRepo::apply_partial`]); the pokemon's own fields are always
    /// overwritten. The result is assembled from the rows returned inside the
    /// transaction rather than re-read after commit.
    ///
    /// Returns `None` if no pokemon with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PokemonRequest,
    ) -> Result<Option<PokemonResponse>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(existing) = Self::lock_by_id(&mut tx, id).await? else {
            return Ok(None);
        };

        let species = SpeciesRepo::apply_partial(&mut tx, existing.species_id, input).await?;

        let update_query = format!(
            "UPDATE pokemon SET
                identifier = $2,
                height = $3,
                weight = $4,
                base_experience = $5,
                \"order\" = $6,
                is_default = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let pokemon = sqlx::query_as::<_, Pokemon>(&update_query)
            .bind(id)
            .bind(&input.identifier)
            .bind(input.height)
            .bind(input.weight)
            .bind(input.base_experience)
            .bind(input.pokemon_order())
            .bind(input.is_default)
            .fetch_one(&mut *tx)
            .await?;

        let color = LookupRepo::identifier(&mut tx, LookupTable::Color, species.color_id).await?;
        let shape = LookupRepo::identifier(&mut tx, LookupTable::Shape, species.shape_id).await?;

        tx.commit().await?;

        Ok(Some(PokemonResponse::from_rows(&pokemon, &species, color, shape)))
    }

    /// Delete a pokemon and its type assignments. Returns `true` if the pokemon existed.
    ///
    /// The owned species row is retained.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(existing) = Self::lock_by_id(&mut tx, id).await? else {
            return Ok(false);
        };

        let type_rows = PokemonTypeRepo::delete_for_pokemon(&mut tx, id).await?;

        sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            pokemon_id = id,
            species_id = existing.species_id,
            type_rows,
            "Pokemon deleted, species retained",
        );
        Ok(true)
    }

    /// Fetch the raw pokemon row and lock it for the rest of the transaction.
    async fn lock_by_id(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<Option<Pokemon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Pokemon>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }
}
