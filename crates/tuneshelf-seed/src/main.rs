use tuneshelf_db::{DatabaseConfig, SystemClock};
use tuneshelf_seed::{run_seed, SeedOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    tuneshelf_seed::init_tracing();

    let db_config = DatabaseConfig::from_env();
    tracing::info!("connecting to database...");
    let db = match tuneshelf_db::connect(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    match run_seed(&db, &SystemClock, SeedOptions::default()).await {
        Ok(summary) => {
            tracing::info!(?summary, "seed complete");
            println!("Database '{}' created & seeded.", db_config.store_name());
        }
        Err(e) => {
            tracing::error!("seeding failed: {e}");
            std::process::exit(1);
        }
    }
}
