//! Reset the configured database to the sample restaurants and pizzas.

use pizza_api::{apply_migrations, connect, seed_sample_data, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pizza_api=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    apply_migrations(&pool).await?;
    let summary = seed_sample_data(&pool).await?;
    tracing::info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "seed complete"
    );
    pool.close().await;
    Ok(())
}
