use anyhow::Result;

use crate::types::{Contact, ContactDetails, ContactId, Field};

/// Persistence seam for the contacts table. Implementations own their
/// connection lifecycle; every call is a complete open/execute/commit
/// cycle with no state shared between operations.
pub trait Storage {
    /// Insert a new contact and return the id assigned by the store.
    fn insert_contact(&self, details: &ContactDetails) -> Result<ContactId>;

    /// Set one field of an existing contact. Returns false when no row
    /// carries the given id; the write and the existence check are a
    /// single statement.
    fn update_field(&self, id: ContactId, field: Field, value: &str) -> Result<bool>;

    /// Remove a contact. Returns false when no row carries the given id.
    fn delete_contact(&self, id: ContactId) -> Result<bool>;

    fn contact_exists(&self, id: ContactId) -> Result<bool>;

    /// Case-insensitive substring match on the name column. SQL `%` and
    /// `_` wildcards in the pattern are honored.
    fn find_by_name(&self, pattern: &str) -> Result<Vec<Contact>>;

    /// All contact names in table-scan order.
    fn list_names(&self) -> Result<Vec<String>>;
}
