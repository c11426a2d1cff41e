//! The in-memory projection of the backend's user records.
//!
//! ## Why this file exists
//!
//! Every page renders from one place: the store. It holds the last known
//! full listing plus the last individually fetched record, and mutates only
//! through the five transition methods below, each the counterpart of one
//! completed API operation. The transitions are pure state math with no I/O
//! and no failure path: replaying the same event sequence from the same
//! starting point always lands on the same result.
//!
//! ## How it is written to
//!
//! Commands never hold a reference to the live store. They queue a
//! [`StoreEvent`] through the updater and the UI thread folds it in, in
//! response-arrival order. Arrival order is also the only ordering
//! guarantee: two actions dispatched back-to-back may land in either order,
//! and a stale list fetch can resurrect a just-deleted row until the next
//! refresh. That race is inherited from the contract and left visible
//! rather than masked.

use std::any::Any;

use roster_states::State;

use super::model::{User, UserId};

/// One completed API operation, as applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A full listing arrived; replaces the collection wholesale.
    ListFetched(Vec<User>),
    /// A single record arrived from a fetch-by-id.
    SingleFetched(User),
    /// The server confirmed a creation, echoing the record with its id.
    Created(User),
    /// The server confirmed an update, echoing the new record.
    Updated(User),
    /// The server confirmed a deletion; the id is echoed locally because
    /// the response carries no body.
    Deleted(UserId),
}

/// Last known server state: the listing plus the selected record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersStore {
    users: Vec<User>,
    selected: Option<User>,
}

impl UsersStore {
    /// The last known full listing, in server order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The last record fetched by id; feeds the view and edit flows.
    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Fold one completed operation into the current state.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::ListFetched(users) => self.apply_list_fetched(users),
            StoreEvent::SingleFetched(user) => self.apply_single_fetched(user),
            StoreEvent::Created(user) => self.apply_created(user),
            StoreEvent::Updated(user) => self.apply_updated(user),
            StoreEvent::Deleted(user_id) => self.apply_deleted(user_id),
        }
    }

    /// Replace the listing wholesale. The payload is trusted as-is.
    pub fn apply_list_fetched(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Overwrite the selected record.
    pub fn apply_single_fetched(&mut self, user: User) {
        self.selected = Some(user);
    }

    /// Append a freshly created record. The server owns id assignment, so
    /// no membership check is made; a duplicate id coming back is allowed
    /// to produce a duplicate row.
    pub fn apply_created(&mut self, user: User) {
        self.users.push(user);
    }

    /// Replace the matching record in place, keeping its position. Without
    /// a match this is a silent no-op: the change shows up on the next
    /// list fetch instead.
    pub fn apply_updated(&mut self, user: User) {
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == user.id) {
            *slot = user;
        }
    }

    /// Drop every record with this id; no-op when none match.
    pub fn apply_deleted(&mut self, user_id: UserId) {
        self.users.retain(|u| u.id != user_id);
    }
}

impl State for UsersStore {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone_number: format!("555-01{id:02}"),
        }
    }

    #[test]
    fn test_list_fetched_replaces_wholesale() {
        let mut store = UsersStore::default();
        store.apply_created(user(9, "Old"));

        let listing = vec![user(1, "A"), user(2, "B")];
        store.apply_list_fetched(listing.clone());

        assert_eq!(store.users(), listing.as_slice(), "listing replaces, never merges");
    }

    #[test]
    fn test_single_fetched_overwrites_selected() {
        let mut store = UsersStore::default();
        assert!(store.selected().is_none(), "selected starts empty");

        store.apply_single_fetched(user(1, "A"));
        store.apply_single_fetched(user(2, "B"));
        assert_eq!(store.selected().map(|u| u.id), Some(2), "last fetch wins");
    }

    #[test]
    fn test_created_appends_in_order() {
        let mut store = UsersStore::default();
        store.apply_list_fetched(vec![user(1, "A")]);
        store.apply_created(user(2, "B"));

        let ids: Vec<UserId> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2], "created rows append at the end");
    }

    #[test]
    fn test_created_allows_duplicate_ids() {
        let mut store = UsersStore::default();
        store.apply_created(user(1, "A"));
        store.apply_created(user(1, "A again"));
        assert_eq!(
            store.users().len(),
            2,
            "id collisions are the server's bug to make and ours to display"
        );
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let mut store = UsersStore::default();
        store.apply_list_fetched(vec![user(1, "A"), user(2, "B")]);

        store.apply_updated(user(1, "A2"));

        assert_eq!(store.users()[0].name, "A2", "record is replaced");
        assert_eq!(store.users()[0].id, 1, "position 0 keeps its id");
        assert_eq!(store.users()[1].id, 2, "other rows keep their position");
    }

    #[test]
    fn test_updated_missing_id_is_a_noop() {
        let mut store = UsersStore::default();
        store.apply_list_fetched(vec![user(1, "A")]);
        let before = store.clone();

        store.apply_updated(user(99, "Ghost"));
        assert_eq!(store, before, "an unknown id must not insert");
    }

    #[test]
    fn test_deleted_missing_id_is_a_noop() {
        let mut store = UsersStore::default();
        store.apply_list_fetched(vec![user(1, "A")]);
        let before = store.clone();

        store.apply_deleted(99);
        assert_eq!(store, before, "deleting an unknown id changes nothing");
    }

    #[test]
    fn test_create_then_delete_restores_listing() {
        let mut store = UsersStore::default();
        store.apply_list_fetched(vec![user(1, "A"), user(2, "B")]);
        let before = store.users().to_vec();

        store.apply_created(user(3, "C"));
        store.apply_deleted(3);

        assert_eq!(
            store.users(),
            before.as_slice(),
            "create followed by delete of a new id is an identity"
        );
    }

    #[test]
    fn test_replay_is_deterministic() {
        let events = vec![
            StoreEvent::ListFetched(vec![user(1, "A"), user(2, "B")]),
            StoreEvent::Created(user(3, "C")),
            StoreEvent::Updated(user(2, "B2")),
            StoreEvent::SingleFetched(user(3, "C")),
            StoreEvent::Deleted(1),
        ];

        let mut first = UsersStore::default();
        let mut second = UsersStore::default();
        for event in events.clone() {
            first.apply(event);
        }
        for event in events {
            second.apply(event);
        }

        assert_eq!(first, second, "same events, same start, same end state");
    }

    // The four end-to-end scenario steps, chained exactly.
    #[test]
    fn test_scenario_list_create_update_delete() {
        let mut store = UsersStore::default();
        assert!(store.users().is_empty());
        assert!(store.selected().is_none());

        // 1: a one-element listing arrives.
        store.apply(StoreEvent::ListFetched(vec![User {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "1".to_string(),
        }]));
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.users()[0].id, 1);

        // 2: a created record appends after it.
        store.apply(StoreEvent::Created(user(2, "B")));
        let ids: Vec<UserId> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);

        // 3: updating id 1 renames position 0 and leaves id 2 where it was.
        let mut renamed = store.users()[0].clone();
        renamed.name = "A2".to_string();
        store.apply(StoreEvent::Updated(renamed));
        assert_eq!(store.users()[0].name, "A2");
        assert_eq!(store.users()[1].id, 2);

        // 4: deleting id 2 leaves just id 1.
        store.apply(StoreEvent::Deleted(2));
        let ids: Vec<UserId> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
