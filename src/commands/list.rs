use std::io::Write;

use anyhow::Result;

use crate::storage::Storage;

pub fn run<W: Write>(storage: &dyn Storage, out: &mut W) -> Result<()> {
    writeln!(out, "Contact List:")?;
    for name in storage.list_names()? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStorage;
    use crate::types::ContactDetails;

    #[test]
    fn list_prints_names_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStorage::new(dir.path().join("contacts.db"));
        store.init().unwrap();
        for name in ["John Doe", "Jane Doe"] {
            store
                .insert_contact(&ContactDetails {
                    name: name.to_string(),
                    ..Default::default()
                })
                .unwrap();
        }

        let mut out = Vec::new();
        run(&store, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Contact List:\nJohn Doe\nJane Doe\n"
        );
    }

    #[test]
    fn list_prints_header_for_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStorage::new(dir.path().join("contacts.db"));
        store.init().unwrap();

        let mut out = Vec::new();
        run(&store, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Contact List:\n");
    }
}
