use anyhow::{Context as AnyhowContext, Result};
use clap::CommandFactory;

use crate::cli::{self, Cli};
use crate::context;
use crate::storage::SqliteStorage;

pub fn run() -> Result<()> {
    let cli = match cli::parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap already words help, version, and usage errors; the
            // process still terminates normally (no exit-code contract)
            err.print().context("printing usage")?;
            return Ok(());
        }
    };

    let Some(cmd) = &cli.cmd else {
        Cli::command().print_help().context("printing usage")?;
        return Ok(());
    };

    let ctx = context::Context::from_cli(&cli);
    crate::tracing::init(ctx.config.log_file.as_deref());
    log::info!("database: {}", ctx.config.db_path.display());

    let storage = SqliteStorage::new(&ctx.config.db_path);
    if ctx.config.reset {
        log::info!("resetting database");
        storage.reset_all().context("resetting database")?;
    }
    storage.init().context("opening contact database")?;

    cmd.run(&storage)
}
