use tuneshelf_db::DatabaseConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    tuneshelf_seed::init_tracing();

    let db_config = DatabaseConfig::from_env();
    let report = match tuneshelf_db::connect(&db_config).await {
        Ok(db) => tuneshelf_seed::check(&db).await,
        Err(e) => Err(e),
    };

    match report {
        Ok(report) => {
            println!("Ping: {}", report.ping);
            println!("SQLite version: {}", report.sqlite_version);
            println!("Tables: {:?}", report.tables);
            let missing = report.missing_tables();
            if !missing.is_empty() {
                println!("Missing catalog tables: {missing:?}");
            }
            println!("Connection OK");
        }
        Err(e) => {
            println!("Connection failed: {e}");
            std::process::exit(1);
        }
    }
}
