use std::io::{BufRead, Write};

use anyhow::Result;

use crate::prompt;
use crate::storage::Storage;
use crate::types::Field;

fn field_menu() -> String {
    let mut menu = String::from(
        "Input the number of the field you wish to edit and press Enter. Leave blank to quit.",
    );
    for field in Field::ALL {
        menu.push_str(&format!("\n{} - {}", field.selector(), field.label()));
    }
    menu
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    SelectingField,
    EnteringValue(Field),
    Done,
}

/// What the driver should do after feeding one line into the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// A field was chosen; ask for its new value next.
    PromptValue(Field),
    /// Selection not understood; show the menu again.
    Reprompt,
    /// Commit this one field change, then return to the menu.
    Apply { field: Field, value: String },
    /// Blank selection; the session is over.
    Quit,
}

/// The multi-field edit loop as an explicit state machine. `next`
/// consumes one line of input and reports the follow-up action without
/// performing any IO, so sessions can be driven from scripted lines.
#[derive(Debug)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            state: EditState::SelectingField,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn next(&mut self, line: &str) -> EditAction {
        match self.state {
            EditState::SelectingField => {
                let token = line.trim();
                if token.is_empty() {
                    self.state = EditState::Done;
                    return EditAction::Quit;
                }
                match Field::from_selector(token) {
                    Some(field) => {
                        self.state = EditState::EnteringValue(field);
                        EditAction::PromptValue(field)
                    }
                    None => EditAction::Reprompt,
                }
            }
            EditState::EnteringValue(field) => {
                self.state = EditState::SelectingField;
                EditAction::Apply {
                    field,
                    value: line.to_string(),
                }
            }
            EditState::Done => EditAction::Quit,
        }
    }
}

pub fn run<R, W>(storage: &dyn Storage, id: Option<&str>, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let Some(id) = super::parse_id_arg("edit", id, out)? else {
        return Ok(());
    };
    if !storage.contact_exists(id)? {
        writeln!(out, "{}", super::NO_ID_MATCH)?;
        return Ok(());
    }

    let menu = field_menu();
    let mut session = EditSession::new();
    loop {
        let state = session.state();
        let action = match state {
            EditState::SelectingField => {
                let line = prompt::read_raw(input, out, &menu)?;
                session.next(&line)
            }
            EditState::EnteringValue(_) => {
                let line = prompt::read_raw(input, out, "Enter the new value:")?;
                session.next(&line)
            }
            EditState::Done => break,
        };

        match action {
            EditAction::Quit => break,
            EditAction::PromptValue(_) => {}
            EditAction::Reprompt => {
                writeln!(out, "Unrecognized command. Please try again.")?;
                writeln!(out)?;
            }
            EditAction::Apply { field, value } => {
                // each field edit is its own committed write; a row that
                // vanished between commits surfaces here as zero rows
                if storage.update_field(id, field, &value)? {
                    log::info!("updated {} for contact id={id}", field.label());
                    writeln!(out, "Update successful.")?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}", super::NO_ID_MATCH)?;
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStorage;
    use crate::types::ContactDetails;
    use std::io::Cursor;

    fn store_with_john() -> (tempfile::TempDir, SqliteStorage) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStorage::new(dir.path().join("contacts.db"));
        store.init().unwrap();
        store
            .insert_contact(&ContactDetails {
                name: "John Doe".to_string(),
                address: "Somewhere".to_string(),
                phone: "555-1234".to_string(),
                email: "example@email.com".to_string(),
            })
            .unwrap();
        (dir, store)
    }

    fn run_session(store: &SqliteStorage, id: Option<&str>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(store, id, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn field_menu_lists_every_selector() {
        let menu = field_menu();
        assert!(menu.contains("Leave blank to quit."));
        assert!(menu.contains("1 - Name"));
        assert!(menu.contains("2 - Address"));
        assert!(menu.contains("3 - Phone Number"));
        assert!(menu.contains("4 - Email Address"));
    }

    #[test]
    fn session_quits_on_blank_selection() {
        let mut session = EditSession::new();
        assert_eq!(session.next(""), EditAction::Quit);
        assert_eq!(session.state(), EditState::Done);
        // further input is ignored once done
        assert_eq!(session.next("1"), EditAction::Quit);
    }

    #[test]
    fn session_walks_selection_then_value() {
        let mut session = EditSession::new();
        assert_eq!(session.next("2"), EditAction::PromptValue(Field::Address));
        assert_eq!(session.state(), EditState::EnteringValue(Field::Address));
        assert_eq!(
            session.next("Elm Street"),
            EditAction::Apply {
                field: Field::Address,
                value: "Elm Street".to_string()
            }
        );
        assert_eq!(session.state(), EditState::SelectingField);
    }

    #[test]
    fn session_reprompts_on_unknown_selector() {
        let mut session = EditSession::new();
        assert_eq!(session.next("9"), EditAction::Reprompt);
        assert_eq!(session.state(), EditState::SelectingField);
        assert_eq!(session.next("name"), EditAction::Reprompt);
        assert_eq!(session.next("1"), EditAction::PromptValue(Field::Name));
    }

    #[test]
    fn session_trims_the_selector_but_not_the_value() {
        let mut session = EditSession::new();
        assert_eq!(session.next(" 3 "), EditAction::PromptValue(Field::Phone));
        assert_eq!(
            session.next(" 555-0000 "),
            EditAction::Apply {
                field: Field::Phone,
                value: " 555-0000 ".to_string()
            }
        );
    }

    #[test]
    fn edit_applies_a_single_field_change() {
        let (_dir, store) = store_with_john();
        let printed = run_session(&store, Some("1"), "1\nJane Doe\n\n");

        assert!(printed.contains("Update successful."));
        let found = store.find_by_name("Jane Doe").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].details.address, "Somewhere");
        assert_eq!(found[0].details.phone, "555-1234");
        assert_eq!(found[0].details.email, "example@email.com");
    }

    #[test]
    fn edit_applies_multiple_fields_in_one_session() {
        let (_dir, store) = store_with_john();
        let printed = run_session(&store, Some("1"), "2\nElsewhere\n4\nnew@email.com\n\n");

        assert_eq!(printed.matches("Update successful.").count(), 2);
        let found = store.find_by_name("John Doe").unwrap();
        assert_eq!(found[0].details.address, "Elsewhere");
        assert_eq!(found[0].details.email, "new@email.com");
    }

    #[test]
    fn edit_with_blank_first_input_changes_nothing() {
        let (_dir, store) = store_with_john();
        let printed = run_session(&store, Some("1"), "\n");

        assert!(!printed.contains("Update successful."));
        let found = store.find_by_name("John Doe").unwrap();
        assert_eq!(found[0].details.phone, "555-1234");
    }

    #[test]
    fn edit_reprompts_on_unknown_selector_then_applies() {
        let (_dir, store) = store_with_john();
        let printed = run_session(&store, Some("1"), "9\n3\n555-9999\n\n");

        assert!(printed.contains("Unrecognized command. Please try again."));
        assert!(printed.contains("Update successful."));
        let found = store.find_by_name("John Doe").unwrap();
        assert_eq!(found[0].details.phone, "555-9999");
    }

    #[test]
    fn edit_rejects_non_numeric_id_without_reading_input() {
        let (_dir, store) = store_with_john();
        let printed = run_session(&store, Some("abc"), "1\nJane\n\n");

        assert!(printed.contains("Please use numeric characters"));
        assert!(store.find_by_name("Jane").unwrap().is_empty());
    }

    #[test]
    fn edit_reports_unknown_id_before_the_loop() {
        let (_dir, store) = store_with_john();
        let printed = run_session(&store, Some("9999"), "1\nJane\n\n");

        assert!(printed.contains("No contacts found with that ID."));
        assert!(!printed.contains("1 - Name"));
        assert!(store.find_by_name("Jane").unwrap().is_empty());
    }

    #[test]
    fn edit_requires_an_id_argument() {
        let (_dir, store) = store_with_john();
        let printed = run_session(&store, None, "");

        assert!(printed.contains("The edit command requires you to specify a Contact ID."));
    }

    /// Passes the session entry check but reports every update as
    /// touching zero rows, as if the row were deleted externally
    /// between commits.
    struct VanishingStore;

    impl Storage for VanishingStore {
        fn insert_contact(&self, _details: &ContactDetails) -> anyhow::Result<crate::types::ContactId> {
            unimplemented!()
        }
        fn update_field(
            &self,
            _id: crate::types::ContactId,
            _field: Field,
            _value: &str,
        ) -> anyhow::Result<bool> {
            Ok(false)
        }
        fn delete_contact(&self, _id: crate::types::ContactId) -> anyhow::Result<bool> {
            Ok(false)
        }
        fn contact_exists(&self, _id: crate::types::ContactId) -> anyhow::Result<bool> {
            Ok(true)
        }
        fn find_by_name(&self, _pattern: &str) -> anyhow::Result<Vec<crate::types::Contact>> {
            Ok(Vec::new())
        }
        fn list_names(&self) -> anyhow::Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn edit_stops_when_the_row_disappears_mid_session() {
        let store = VanishingStore;
        let mut input = Cursor::new(b"1\nJane\n2\nnever reached\n".to_vec());
        let mut out = Vec::new();
        run(&store, Some("1"), &mut input, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("No contacts found with that ID."));
        assert!(!printed.contains("Update successful."));
        // the session ends instead of looping back to the menu
        assert_eq!(printed.matches("1 - Name").count(), 1);
    }
}
