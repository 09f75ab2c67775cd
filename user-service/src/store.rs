// In-memory CRUD store
// Ordered user list with a monotonic id minter. Every mutation is a
// synchronous in-memory operation; nothing is written back to any backend.

use crate::models::{User, UserDraft};

pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Replace the whole list with a freshly fetched collection, preserving
    /// the order received. Advances the id minter past the largest fetched
    /// id so later local creates cannot collide.
    pub fn replace_all(&mut self, users: Vec<User>) {
        let max_id = users.iter().map(|u| u.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.users = users;
    }

    /// Build a user from the draft and place it at the head of the list.
    pub fn create(&mut self, draft: UserDraft) -> User {
        let user = User {
            id: self.mint_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        };
        self.users.insert(0, user.clone());
        user
    }

    /// Overwrite the editable fields of the matching entry in place. The id
    /// and the list order are untouched. Returns false when no entry matches.
    pub fn update(&mut self, id: u64, draft: UserDraft) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = draft.name;
                user.email = draft.email;
                user.phone = draft.phone;
                true
            }
            None => false,
        }
    }

    /// Remove the matching entry; the remaining entries keep their order.
    /// Deleting an absent id is a no-op and returns false.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // Ids are minted strictly above both the counter's last value and the
    // largest id currently in the list, so a late remote load interleaved
    // with local creates never produces a collision.
    fn mint_id(&mut self) -> u64 {
        let max_id = self.users.iter().map(|u| u.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_replace_all_preserves_received_order() {
        let mut store = UserStore::new();
        store.replace_all(vec![
            remote_user(3, "Carol"),
            remote_user(1, "Alice"),
            remote_user(2, "Bob"),
        ]);

        let names: Vec<&str> = store.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_create_prepends_with_unique_id() {
        let mut store = UserStore::new();
        store.replace_all(vec![remote_user(1, "Alice"), remote_user(2, "Bob")]);

        let created = store.create(UserDraft::new("A", "a@x.com", "1"));

        assert_eq!(store.len(), 3);
        assert_eq!(store.users()[0], created);
        assert_eq!(created.name, "A");
        assert_eq!(created.email, "a@x.com");
        assert_eq!(created.phone, "1");
        assert!(store.users().iter().filter(|u| u.id == created.id).count() == 1);
        assert!(created.id > 2);
    }

    #[test]
    fn test_ids_stay_unique_when_load_lands_after_creates() {
        let mut store = UserStore::new();
        let first = store.create(UserDraft::new("Local", "l@x.com", "1"));

        // Remote collection arrives late with overlapping ids
        store.replace_all(vec![remote_user(1, "Alice"), remote_user(9, "Bob")]);
        let second = store.create(UserDraft::new("Another", "a@x.com", "2"));

        assert!(second.id > 9);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_changes_fields_only() {
        let mut store = UserStore::new();
        store.replace_all(vec![
            remote_user(1, "Alice"),
            remote_user(2, "Bob"),
            remote_user(3, "Carol"),
        ]);

        assert!(store.update(2, UserDraft::new("Bobby", "bobby@x.com", "9")));

        let users = store.users();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, "Alice");
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].name, "Bobby");
        assert_eq!(users[1].email, "bobby@x.com");
        assert_eq!(users[1].phone, "9");
        assert_eq!(users[2].name, "Carol");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = UserStore::new();
        store.replace_all(vec![remote_user(1, "Alice")]);

        assert!(!store.update(42, UserDraft::new("X", "x@x.com", "0")));
        assert_eq!(store.users()[0].name, "Alice");
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let mut store = UserStore::new();
        store.replace_all(vec![
            remote_user(1, "Alice"),
            remote_user(2, "Bob"),
            remote_user(3, "Carol"),
        ]);

        assert!(store.delete(2));

        let names: Vec<&str> = store.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = UserStore::new();
        store.replace_all(vec![remote_user(1, "Alice")]);

        assert!(!store.delete(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_finds_by_id() {
        let mut store = UserStore::new();
        store.replace_all(vec![remote_user(7, "Alice")]);

        assert_eq!(store.get(7).map(|u| u.name.as_str()), Some("Alice"));
        assert!(store.get(8).is_none());
    }
}
