use std::io::{BufRead, Write};

use anyhow::Result;

use crate::prompt;
use crate::storage::Storage;
use crate::types::ContactDetails;

pub fn run<R, W>(storage: &dyn Storage, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Input the new contact's details. Press Enter to continue.")?;
    let details = ContactDetails {
        name: prompt::read_trimmed(input, out, "Name:")?,
        address: prompt::read_trimmed(input, out, "Address:")?,
        phone: prompt::read_trimmed(input, out, "Phone number:")?,
        email: prompt::read_trimmed(input, out, "Email address:")?,
    };

    let id = storage.insert_contact(&details)?;
    log::info!("added contact id={id}");
    writeln!(out, "{} added to contacts.", details.name)?;
    Ok(())
}
