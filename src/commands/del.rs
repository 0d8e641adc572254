use std::io::Write;

use anyhow::Result;

use crate::storage::Storage;

pub fn run<W: Write>(storage: &dyn Storage, id: Option<&str>, out: &mut W) -> Result<()> {
    let Some(id) = super::parse_id_arg("del", id, out)? else {
        return Ok(());
    };

    if storage.delete_contact(id)? {
        log::info!("deleted contact id={id}");
        writeln!(out, "Contact deleted.")?;
    } else {
        writeln!(out, "{}", super::NO_ID_MATCH)?;
    }
    Ok(())
}
