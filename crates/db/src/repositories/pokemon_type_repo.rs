//! Repository for the `pokemon_types` join table.

use sqlx::PgPool;
use pokedex_core::types::DbId;

use crate::models::pokemon_type::PokemonType;

const COLUMNS: &str = "id, pokemon_id, type_id, slot";

/// Type assignments are only ever removed here, as part of deleting a pokemon.
pub struct PokemonTypeRepo;

impl PokemonTypeRepo {
    /// Delete every type assignment belonging to `pokemon_id`. Returns the number of rows removed.
    pub async fn delete_for_pokemon(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        pokemon_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pokemon_types WHERE pokemon_id = $1")
            .bind(pokemon_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }

    /// List the type assignments of a pokemon ordered by slot.
    pub async fn list_for_pokemon(
        pool: &PgPool,
        pokemon_id: DbId,
    ) -> Result<Vec<PokemonType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM pokemon_types WHERE pokemon_id = $1 ORDER BY slot");
        sqlx::query_as::<_, PokemonType>(&query)
            .bind(pokemon_id)
            .fetch_all(pool)
            .await
    }
}
