//! In-memory session state for the contact client.
//!
//! The session owns the full replica of the server's contact list plus the
//! transient selection state for the two dialogs. It is plain data with no
//! DOM or network dependency, so the whole state machine is unit-testable;
//! the page drives it through [`SessionAction`]s.

use std::rc::Rc;

use rolodex_shared::Contact;
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSession {
    contacts: Vec<Contact>,
    editor_open: bool,
    current_edit_id: Option<i32>,
    delete_contact_id: Option<i32>,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn total(&self) -> usize {
        self.contacts.len()
    }

    pub fn find(&self, id: i32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Replace the list wholesale after a fetch. Selection state is left
    /// alone; a reload never closes an open dialog.
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    pub fn editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn current_edit_id(&self) -> Option<i32> {
        self.current_edit_id
    }

    /// The contact whose data pre-fills the edit form, if editing.
    pub fn edit_target(&self) -> Option<&Contact> {
        self.current_edit_id.and_then(|id| self.find(id))
    }

    /// Open the form with no pre-filled data; any previous edit target is
    /// cleared.
    pub fn open_create(&mut self) {
        self.current_edit_id = None;
        self.editor_open = true;
    }

    /// Open the form pre-filled from the given contact. Silently a no-op if
    /// the id is not in the list.
    pub fn open_edit(&mut self, id: i32) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.current_edit_id = Some(id);
        self.editor_open = true;
        true
    }

    /// Closing the editor always clears the edit target, whether or not a
    /// submission happened.
    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.current_edit_id = None;
    }

    pub fn delete_target(&self) -> Option<&Contact> {
        self.delete_contact_id.and_then(|id| self.find(id))
    }

    /// Open the delete confirmation. Silently a no-op if the id is not in
    /// the list.
    pub fn open_delete(&mut self, id: i32) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.delete_contact_id = Some(id);
        true
    }

    pub fn close_delete(&mut self) {
        self.delete_contact_id = None;
    }
}

pub enum SessionAction {
    /// A fetch completed; replace the replica.
    Loaded(Vec<Contact>),
    OpenCreate,
    OpenEdit(i32),
    CloseEditor,
    OpenDelete(i32),
    CloseDelete,
}

impl Reducible for ContactSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Loaded(contacts) => next.replace_all(contacts),
            SessionAction::OpenCreate => next.open_create(),
            SessionAction::OpenEdit(id) => {
                next.open_edit(id);
            }
            SessionAction::CloseEditor => next.close_editor(),
            SessionAction::OpenDelete(id) => {
                next.open_delete(id);
            }
            SessionAction::CloseDelete => next.close_delete(),
        }
        next.into()
    }
}

/// Case-insensitive substring filter over full name, phone, and email.
/// An empty search term returns the list unchanged.
pub fn filter_contacts(contacts: &[Contact], search: &str) -> Vec<Contact> {
    if search.is_empty() {
        return contacts.to_vec();
    }
    let term = search.to_lowercase();
    contacts
        .iter()
        .filter(|c| {
            let full_name = c.display_name().to_lowercase();
            let phone = c.phone.to_lowercase();
            let email = c.email.as_deref().unwrap_or("").to_lowercase();
            full_name.contains(&term) || phone.contains(&term) || email.contains(&term)
        })
        .cloned()
        .collect()
}

/// Trim a form field; a blank value becomes `None` so it serializes as an
/// explicit `null` in the request body.
pub fn normalize_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
