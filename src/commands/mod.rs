use std::io::{self, Write};

use anyhow::Result;

use crate::cli::Command;
use crate::storage::Storage;
use crate::types::{ContactId, ContactIdParseError};

pub mod add;
pub mod del;
pub mod edit;
pub mod find;
pub mod list;

pub(crate) const NO_ID_MATCH: &str = "No contacts found with that ID.\n\
    Check that you have specified the correct Contact ID. Use the find \
    command to view a contact's ID number.";

impl Command {
    pub fn run(&self, storage: &dyn Storage) -> Result<()> {
        let stdin = io::stdin();
        let mut out = io::stdout();
        match self {
            Command::Add => add::run(storage, &mut stdin.lock(), &mut out),
            Command::Edit { id } => edit::run(storage, id.as_deref(), &mut stdin.lock(), &mut out),
            Command::Del { id } => del::run(storage, id.as_deref(), &mut out),
            Command::Find { name } => find::run(storage, &name.join(" "), &mut out),
            Command::List => list::run(storage, &mut out),
        }
    }
}

/// Resolve the id argument shared by edit and del. A missing or
/// malformed id is reported to the user and yields `None`; the caller
/// then returns without touching the store.
pub(crate) fn parse_id_arg<W: Write>(
    cmd: &str,
    id: Option<&str>,
    out: &mut W,
) -> Result<Option<ContactId>> {
    let Some(raw) = id else {
        writeln!(
            out,
            "The {cmd} command requires you to specify a Contact ID.\n\
             To view the usage instructions, run the program with no commands."
        )?;
        return Ok(None);
    };

    match raw.parse::<ContactId>() {
        Ok(id) => Ok(Some(id)),
        Err(ContactIdParseError::NotNumeric) => {
            writeln!(out, "Please use numeric characters for the Contact ID.")?;
            Ok(None)
        }
        // a numeric id wider than i64 cannot name any stored row
        Err(ContactIdParseError::OutOfRange(_)) => {
            writeln!(out, "{NO_ID_MATCH}")?;
            Ok(None)
        }
    }
}
