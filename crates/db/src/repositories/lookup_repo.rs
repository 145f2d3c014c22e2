//! Repository for the color and shape lookup tables.

use pokedex_core::types::DbId;

use crate::models::lookup::LookupTable;

/// Resolves lookup ids to their display identifiers.
pub struct LookupRepo;

impl LookupRepo {
    /// Resolve `id` in `table` to its `identifier`.
    ///
    /// A `None` id, or an id with no matching row, resolves to `None`.
    pub async fn identifier(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        table: LookupTable,
        id: Option<DbId>,
    ) -> Result<Option<String>, sqlx::Error> {
        let Some(id) = id else {
            return Ok(None);
        };
        let query = format!("SELECT identifier FROM {} WHERE id = $1", table.table_name());
        sqlx::query_scalar::<_, String>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }
}
