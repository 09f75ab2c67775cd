use serde::Deserialize;

/// A directory entry. `id` is unique within the in-memory list and acts as
/// its primary key; remote entries arrive with server-assigned ids, local
/// entries get ids minted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// The editable fields without an id, as captured by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// True when every field is empty; blank drafts are never submitted.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}
