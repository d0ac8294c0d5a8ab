//! Connection settings resolved from flags, environment variables, and .env files.
//!
//! Either a full `DATABASE_URL` or the individual libpq-style parts
//! (host, port, dbname, user, password) can be supplied; the URL wins.

use clap::Args;
use sqlx::postgres::PgConnectOptions;
use tracing::debug;

/// Load a `.env` file from the current directory, if one exists.
///
/// dotenvy does not overwrite variables that are already set, so the
/// real environment keeps priority.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("loaded .env from {}", path.display());
    }
}

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Full connection URL; overrides the individual settings below
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Database server host
    #[arg(long, env = "PGHOST", default_value = "localhost", global = true)]
    pub host: String,

    /// Database server port
    #[arg(long, env = "PGPORT", default_value_t = 5432, global = true)]
    pub port: u16,

    /// Database name
    #[arg(long, env = "PGDATABASE", default_value = "pgusers", global = true)]
    pub dbname: String,

    /// Database user
    #[arg(long, env = "PGUSER", default_value = "postgres", global = true)]
    pub user: String,

    /// Database password (empty for trust authentication)
    #[arg(
        long,
        env = "PGPASSWORD",
        default_value = "",
        hide_env_values = true,
        global = true
    )]
    pub password: String,
}

impl ConnectArgs {
    /// Resolve the arguments into driver connect options.
    ///
    /// A malformed `DATABASE_URL` is rejected here, before any
    /// connection attempt is made.
    pub fn options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.database_url {
            return url.parse();
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.dbname)
            .username(&self.user);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        Ok(options)
    }
}
