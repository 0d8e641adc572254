use std::io::Write;

use anyhow::Result;

use crate::storage::Storage;

pub fn run<W: Write>(storage: &dyn Storage, pattern: &str, out: &mut W) -> Result<()> {
    let results = storage.find_by_name(pattern)?;
    log::debug!("find pattern={pattern:?} matched {} row(s)", results.len());

    writeln!(out, "{} result(s) found:", results.len())?;
    for contact in &results {
        writeln!(out)?;
        writeln!(out, "Name:          {}", contact.details.name)?;
        writeln!(out, "Address:       {}", contact.details.address)?;
        writeln!(out, "Phone Number:  {}", contact.details.phone)?;
        writeln!(out, "Email Address: {}", contact.details.email)?;
        writeln!(out, "Contact ID:    {}", contact.id)?;
    }
    Ok(())
}
