use clap::Parser;

use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Save and look up contact details from the command line",
    long_about = "A small contact book backed by a local SQLite database. Contacts carry a name, address, phone number and email address and are addressed by the id shown in find output.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long = "db",
        env = "CONTACTS_DB",
        default_value = "contacts.db",
        value_name = "PATH",
        help = "Path to the SQLite database file"
    )]
    pub db_path: String,

    #[arg(
        long = "log-file",
        env = "CONTACTS_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        default_value_t = false,
        help = "Delete the database file before running the command"
    )]
    pub reset: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Result<Cli, clap::Error> {
    dotenvy::dotenv().ok();
    Cli::try_parse()
}
