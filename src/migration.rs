//! Apply the schema to the database: tables in foreign-key dependency order, then indexes.

use sqlx::SqlitePool;

const RESTAURANTS: &str = r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const PIZZAS: &str = r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const RESTAURANT_PIZZAS: &str = r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price REAL NOT NULL,
        restaurant_id INTEGER NOT NULL REFERENCES restaurants (id),
        pizza_id INTEGER NOT NULL REFERENCES pizzas (id),
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)",
];

/// Create tables and indexes if missing. Idempotent.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for ddl in [RESTAURANTS, PIZZAS, RESTAURANT_PIZZAS].into_iter().chain(INDEXES.iter().copied()) {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("schema up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connect;

    #[tokio::test]
    async fn creates_all_tables_and_runs_twice() {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, ["pizzas", "restaurant_pizzas", "restaurants"]);
    }
}
