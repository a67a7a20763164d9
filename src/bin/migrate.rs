use dealer_portal_api::{config::AppConfig, db::create_orm_conn, migration::Migrator};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sea_orm_migration=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;

    match std::env::args().nth(1).as_deref().unwrap_or("up") {
        "up" => {
            Migrator::up(&orm, None).await?;
            println!("Migrations applied");
        }
        "down" => {
            Migrator::down(&orm, Some(1)).await?;
            println!("Last migration rolled back");
        }
        "fresh" => {
            Migrator::fresh(&orm).await?;
            println!("Schema recreated");
        }
        "status" => Migrator::status(&orm).await?,
        other => anyhow::bail!("unknown command `{other}`; expected up, down, fresh or status"),
    }
    Ok(())
}
