//! Repository for the `pizzas` table.

use crate::models::{DbId, Pizza};
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

const COLUMNS: &str = "id, name, ingredients, created_at";

pub struct PizzaRepo;

impl PizzaRepo {
    pub async fn create<'e, E>(executor: E, name: &str, ingredients: &str) -> Result<Pizza, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Pizza>(&query)
            .bind(name)
            .bind(ingredients)
            .fetch_one(executor)
            .await
    }

    /// All pizzas, ascending id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pizza>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pizzas ORDER BY id");
        tracing::debug!(sql = %query, "query");
        sqlx::query_as::<_, Pizza>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Pizza>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM pizzas WHERE id = ?");
        sqlx::query_as::<_, Pizza>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Batch-load pizzas for a set of ids. Used to resolve join rows without one query per row.
    pub async fn find_by_ids<'e, E>(executor: E, ids: &[DbId]) -> Result<Vec<Pizza>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM pizzas WHERE id IN ("));
        let mut values = qb.separated(", ");
        for id in ids {
            values.push_bind(*id);
        }
        values.push_unseparated(") ORDER BY id");
        tracing::debug!(sql = %qb.sql(), "query");
        qb.build_query_as::<Pizza>().fetch_all(executor).await
    }
}
