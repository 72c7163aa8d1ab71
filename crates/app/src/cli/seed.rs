use clap::Args;
use storefront_app::{context::AppContext, database, database::Db, seed::seed_demo_products};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Remove every cart line and product before seeding
    #[arg(long)]
    reset: bool,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool);

    if args.reset {
        db.reset()
            .await
            .map_err(|error| format!("failed to clear existing data: {error}"))?;
    }

    let context = AppContext::from_db(&db);

    let seeded = seed_demo_products(context.products.as_ref())
        .await
        .map_err(|error| format!("failed to seed products: {error}"))?;

    println!("seeded {} products", seeded.len());

    Ok(())
}
