use catalog_app::database::{self, PoolSettings};
use clap::Args;
use sqlx::query_scalar;

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// `SQLite` connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://catalog.db")]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, PoolSettings::default())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply schema: {error}"))?;

    let tables: Vec<String> = query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .map_err(|error| format!("failed to list tables: {error}"))?;

    pool.close().await;

    #[expect(clippy::print_stdout, reason = "CLI output")]
    {
        println!("schema applied to {}", args.database_url);
        println!("tables: {}", tables.join(", "));
    }

    Ok(())
}
