//! pgusers CLI - parameterized CRUD against a PostgreSQL `users` table
//!
//! A walkthrough of the basics: open a pooled connection, ping it, then
//! enumerate, insert, update, fetch, and delete rows with positional
//! parameters. `demo` runs the whole sequence in one go; the remaining
//! subcommands expose each statement individually.
//!
//! Every step propagates its error to `main`, which logs it and exits
//! nonzero. The table schema is external: a `users` table with `id`
//! (integer primary key), `first_name`, and `last_name` columns.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use sqlx::PgPool;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod db;

use config::ConnectArgs;
use db::UserRepo;

#[derive(Parser, Debug)]
#[command(
    name = "pgusers",
    version,
    about = "Parameterized CRUD walkthrough against a PostgreSQL users table"
)]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full walkthrough: list, insert, update, fetch one, delete
    Demo(DemoArgs),
    /// Print every row in the users table
    List,
    /// Insert a user (the id is assigned by the database)
    Add(AddArgs),
    /// Change a user's first name by id
    Rename(RenameArgs),
    /// Fetch a single user by id
    Show(ShowArgs),
    /// Delete a user by id
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// First name for the inserted row
    #[arg(long, default_value = "Jack")]
    first_name: String,

    /// Last name for the inserted row
    #[arg(long, default_value = "Brown")]
    last_name: String,

    /// Id targeted by the update step
    #[arg(long, default_value_t = 5)]
    rename_id: i32,

    /// Replacement first name for the update step
    #[arg(long, default_value = "Jackie")]
    rename_to: String,

    /// Id fetched by the single-row select step
    #[arg(long, default_value_t = 1)]
    show_id: i32,

    /// Id targeted by the delete step
    #[arg(long, default_value_t = 6)]
    remove_id: i32,
}

#[derive(Args, Debug)]
struct AddArgs {
    /// First name of the new user
    first_name: String,

    /// Last name of the new user
    last_name: String,
}

#[derive(Args, Debug)]
struct RenameArgs {
    /// Id of the user to rename
    id: i32,

    /// New first name
    first_name: String,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Id of the user to fetch
    id: i32,
}

#[derive(Args, Debug)]
struct RemoveArgs {
    /// Id of the user to delete
    id: i32,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    config::load_dotenv();
    let cli = Cli::parse();

    let options = cli
        .connect
        .options()
        .context("invalid connection settings")?;
    let pool = db::connect(options)
        .await
        .context("unable to connect to database")?;
    info!("connected to database");

    let result = match cli.command {
        Commands::Demo(args) => run_demo(&pool, args).await,
        Commands::List => print_all_rows(&pool).await,
        Commands::Add(args) => run_add(&pool, args).await,
        Commands::Rename(args) => run_rename(&pool, args).await,
        Commands::Show(args) => run_show(&pool, args).await,
        Commands::Remove(args) => run_remove(&pool, args).await,
    };

    // Release pooled connections before reporting the outcome.
    pool.close().await;
    result
}

/// The original linear flow: enumerate between every mutation so the
/// effect of each statement is visible in the output.
async fn run_demo(pool: &PgPool, args: DemoArgs) -> Result<()> {
    let repo = UserRepo::new(pool);

    print_all_rows(pool).await?;

    let created = repo.create(&args.first_name, &args.last_name).await?;
    info!(
        "inserted user {} ({} {})",
        created.id, created.first_name, created.last_name
    );
    print_all_rows(pool).await?;

    let renamed = repo.rename(args.rename_id, &args.rename_to).await?;
    info!("renamed {} row(s)", renamed);
    print_all_rows(pool).await?;

    let user = repo.get(args.show_id).await?;
    println!("{} {} {}", user.id, user.first_name, user.last_name);

    let removed = repo.delete(args.remove_id).await?;
    info!("deleted {} row(s)", removed);
    print_all_rows(pool).await
}

/// Enumerate the whole table, printing each row as it arrives.
async fn print_all_rows(pool: &PgPool) -> Result<()> {
    let count = UserRepo::new(pool)
        .for_each(|user| println!("{:<6} {} {}", user.id, user.first_name, user.last_name))
        .await?;
    info!("{} row(s)", count);
    Ok(())
}

async fn run_add(pool: &PgPool, args: AddArgs) -> Result<()> {
    let user = UserRepo::new(pool)
        .create(&args.first_name, &args.last_name)
        .await?;
    info!("inserted user {}", user.id);
    Ok(())
}

async fn run_rename(pool: &PgPool, args: RenameArgs) -> Result<()> {
    let renamed = UserRepo::new(pool)
        .rename(args.id, &args.first_name)
        .await?;
    info!("renamed {} row(s)", renamed);
    Ok(())
}

async fn run_show(pool: &PgPool, args: ShowArgs) -> Result<()> {
    let user = UserRepo::new(pool).get(args.id).await?;
    println!("{} {} {}", user.id, user.first_name, user.last_name);
    Ok(())
}

async fn run_remove(pool: &PgPool, args: RemoveArgs) -> Result<()> {
    let removed = UserRepo::new(pool).delete(args.id).await?;
    info!("deleted {} row(s)", removed);
    Ok(())
}
