//! Global Application State Store
//!
//! `Library` is the plain, owned collection store; `AppState` wraps it in a
//! Leptos `reactive_stores::Store` for fine-grained reactivity.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{GameEntry, GameId, Membership};
use crate::reconcile::Notice;
use crate::search::SearchState;

/// The two ordered game collections
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Library {
    playing: Vec<GameEntry>,
    wishlist: Vec<GameEntry>,
    /// Entries fading out, from the remove request until the delete settles
    pending_removal: HashSet<GameId>,
    /// Pending entries whose delete call has been issued
    deleting: HashSet<GameId>,
}

impl Library {
    /// Build from backend rows: partition by membership, order by position,
    /// first occurrence of an id wins.
    pub fn from_entries(entries: Vec<GameEntry>) -> Self {
        let mut lib = Library::default();
        let mut seen = HashSet::new();
        let mut entries = entries;
        entries.sort_by_key(|e| e.position.unwrap_or(i32::MAX));
        for entry in entries {
            if seen.insert(entry.id) {
                lib.collection_mut(entry.membership).push(entry);
            }
        }
        lib
    }

    /// Take a fresh backend load while keeping local state. Entries present
    /// here win over their loaded copies; loaded-only entries keep their
    /// load order ahead of local ones.
    pub fn merge_loaded(&mut self, loaded: Library) {
        let local = std::mem::take(self);
        let mut merged = Library::default();
        for membership in Membership::ALL {
            for entry in loaded.collection(membership) {
                if local.find(entry.id).is_none() {
                    merged.collection_mut(membership).push(entry.clone());
                }
            }
        }
        for membership in Membership::ALL {
            for entry in local.collection(membership) {
                merged.append(entry.clone());
            }
        }
        merged.pending_removal = local.pending_removal;
        merged.deleting = local.deleting;
        *self = merged;
    }

    pub fn collection(&self, membership: Membership) -> &[GameEntry] {
        match membership {
            Membership::Playing => &self.playing,
            Membership::Wishlist => &self.wishlist,
        }
    }

    fn collection_mut(&mut self, membership: Membership) -> &mut Vec<GameEntry> {
        match membership {
            Membership::Playing => &mut self.playing,
            Membership::Wishlist => &mut self.wishlist,
        }
    }

    pub fn find(&self, id: GameId) -> Option<&GameEntry> {
        self.playing.iter().chain(self.wishlist.iter()).find(|e| e.id == id)
    }

    /// Which collection holds the entry
    pub fn membership_of(&self, id: GameId) -> Option<Membership> {
        Membership::ALL
            .into_iter()
            .find(|m| self.collection(*m).iter().any(|e| e.id == id))
    }

    /// Collection already tracking this catalog game, if any
    pub fn tracking(&self, catalog_id: u32) -> Option<Membership> {
        Membership::ALL
            .into_iter()
            .find(|m| self.collection(*m).iter().any(|e| e.catalog_id == catalog_id))
    }

    pub fn len(&self) -> usize {
        self.playing.len() + self.wishlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append to the collection named by the entry's tag.
    /// Returns false if the id is already present.
    pub fn append(&mut self, entry: GameEntry) -> bool {
        if self.find(entry.id).is_some() {
            return false;
        }
        self.collection_mut(entry.membership).push(entry);
        true
    }

    /// Move an entry to the end of `to`, retagging it in the same step.
    /// Returns the source collection and index so the move can be undone.
    pub fn move_entry(&mut self, id: GameId, to: Membership) -> Option<(Membership, usize)> {
        let from = self.membership_of(id)?;
        if from == to {
            return None;
        }
        let source = self.collection_mut(from);
        let index = source.iter().position(|e| e.id == id)?;
        let mut entry = source.remove(index);
        entry.membership = to;
        self.collection_mut(to).push(entry);
        Some((from, index))
    }

    /// Put an entry back into `membership` at `index` (clamped), wherever it
    /// currently is.
    pub fn restore(&mut self, id: GameId, membership: Membership, index: usize) -> bool {
        let Some(mut entry) = self.take(id) else {
            return false;
        };
        entry.membership = membership;
        let target = self.collection_mut(membership);
        let index = index.min(target.len());
        target.insert(index, entry);
        true
    }

    /// Remove the entry from whichever collection holds it
    pub fn remove(&mut self, id: GameId) -> Option<GameEntry> {
        self.pending_removal.remove(&id);
        self.deleting.remove(&id);
        self.take(id)
    }

    fn take(&mut self, id: GameId) -> Option<GameEntry> {
        let from = self.membership_of(id)?;
        let source = self.collection_mut(from);
        let index = source.iter().position(|e| e.id == id)?;
        Some(source.remove(index))
    }

    /// Flag an entry for fade-out. False if unknown or already pending.
    pub fn mark_pending_removal(&mut self, id: GameId) -> bool {
        self.find(id).is_some() && self.pending_removal.insert(id)
    }

    /// Claim a pending entry for its delete call. False if the entry is not
    /// pending or a delete is already in flight.
    pub fn begin_delete(&mut self, id: GameId) -> bool {
        self.pending_removal.contains(&id) && self.deleting.insert(id)
    }

    pub fn clear_pending_removal(&mut self, id: GameId) -> bool {
        self.deleting.remove(&id);
        self.pending_removal.remove(&id)
    }

    pub fn is_pending_removal(&self, id: GameId) -> bool {
        self.pending_removal.contains(&id)
    }

    /// Every entry is tagged with the collection holding it and no id
    /// appears twice.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for membership in Membership::ALL {
            for entry in self.collection(membership) {
                if entry.membership != membership {
                    return Err(format!(
                        "game {} tagged {} but stored in {}",
                        entry.id,
                        entry.membership.as_str(),
                        membership.as_str()
                    ));
                }
                if !seen.insert(entry.id) {
                    return Err(format!("game {} appears twice", entry.id));
                }
            }
        }
        for id in &self.pending_removal {
            if !seen.contains(id) {
                return Err(format!("pending removal of unknown game {}", id));
            }
        }
        if let Some(id) = self.deleting.iter().find(|id| !self.pending_removal.contains(id)) {
            return Err(format!("game {} deleting without a pending mark", id));
        }
        Ok(())
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Playing + wishlist collections
    pub library: Library,
    /// Catalog search box state
    pub search: SearchState,
    /// Toasts waiting to be shown
    pub notices: Vec<Notice>,
    /// True until the first library load completes
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Access to a `Library`, reactive in the app and a plain cell in tests
pub trait LibraryHandle {
    fn inspect<R>(&self, f: impl FnOnce(&Library) -> R) -> R;
    fn mutate<R>(&self, f: impl FnOnce(&mut Library) -> R) -> R;
}

impl LibraryHandle for AppStore {
    fn inspect<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        f(&*self.library().read_untracked())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Library) -> R) -> R {
        f(&mut *self.library().write())
    }
}

impl LibraryHandle for Rc<RefCell<Library>> {
    fn inspect<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        f(&*self.borrow())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Library) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

// ========================
// Store Helper Functions
// ========================

/// Fold a fresh backend load into the library
pub fn store_set_library(store: &AppStore, library: Library) {
    store.library().write().merge_loaded(library);
    store.loading().set(false);
}

/// Queue a toast
pub fn store_push_notice(store: &AppStore, notice: Notice) {
    store.notices().write().push(notice);
}

/// Drop the oldest toast
pub fn store_pop_notice(store: &AppStore) {
    let field = store.notices();
    let mut notices = field.write();
    if !notices.is_empty() {
        notices.remove(0);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn entry(id: GameId, name: &str, membership: Membership) -> GameEntry {
        GameEntry {
            id,
            catalog_id: id + 1000,
            name: name.to_string(),
            cover_url: format!("{}.jpg", name.to_lowercase()),
            membership,
            platform: None,
            position: None,
        }
    }

    fn ids(lib: &Library, membership: Membership) -> Vec<GameId> {
        lib.collection(membership).iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_from_entries_partitions_and_orders() {
        let mut a = entry(1, "Hades", Membership::Playing);
        a.position = Some(2);
        let mut b = entry(2, "Celeste", Membership::Playing);
        b.position = Some(1);
        let c = entry(3, "Tunic", Membership::Wishlist);
        let dup = entry(1, "Hades again", Membership::Wishlist);

        let lib = Library::from_entries(vec![a, b, c, dup]);

        assert_eq!(ids(&lib, Membership::Playing), vec![2, 1]);
        assert_eq!(ids(&lib, Membership::Wishlist), vec![3]);
        lib.check_invariants().unwrap();
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut lib = Library::default();
        assert!(lib.append(entry(1, "Hades", Membership::Wishlist)));
        assert!(!lib.append(entry(1, "Hades", Membership::Playing)));
        assert_eq!(lib.len(), 1);
        lib.check_invariants().unwrap();
    }

    #[test]
    fn test_move_entry_retags_and_appends() {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Wishlist));
        lib.append(entry(2, "Celeste", Membership::Wishlist));
        lib.append(entry(3, "Tunic", Membership::Playing));

        let undo = lib.move_entry(1, Membership::Playing);

        assert_eq!(undo, Some((Membership::Wishlist, 0)));
        assert_eq!(ids(&lib, Membership::Playing), vec![3, 1]);
        assert_eq!(ids(&lib, Membership::Wishlist), vec![2]);
        assert_eq!(lib.find(1).unwrap().membership, Membership::Playing);
        lib.check_invariants().unwrap();
    }

    #[test]
    fn test_move_to_same_collection_is_noop() {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Playing));
        let before = lib.clone();

        assert_eq!(lib.move_entry(1, Membership::Playing), None);
        assert_eq!(lib.move_entry(99, Membership::Wishlist), None);
        assert_eq!(lib, before);
    }

    #[test]
    fn test_restore_puts_entry_back_at_index() {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Wishlist));
        lib.append(entry(2, "Celeste", Membership::Wishlist));
        lib.append(entry(3, "Tunic", Membership::Wishlist));

        let (from, index) = lib.move_entry(2, Membership::Playing).unwrap();
        assert!(lib.restore(2, from, index));

        assert_eq!(ids(&lib, Membership::Wishlist), vec![1, 2, 3]);
        assert!(lib.collection(Membership::Playing).is_empty());
        lib.check_invariants().unwrap();
    }

    #[test]
    fn test_pending_removal_guard() {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Playing));

        assert!(lib.mark_pending_removal(1));
        assert!(!lib.mark_pending_removal(1));
        assert!(!lib.mark_pending_removal(42));
        assert!(lib.is_pending_removal(1));

        lib.remove(1);
        assert!(!lib.is_pending_removal(1));
        lib.check_invariants().unwrap();
    }

    #[test]
    fn test_delete_claimed_once() {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Playing));

        assert!(!lib.begin_delete(1));
        lib.mark_pending_removal(1);
        assert!(lib.begin_delete(1));
        assert!(!lib.begin_delete(1));
        lib.check_invariants().unwrap();

        lib.clear_pending_removal(1);
        assert!(!lib.begin_delete(1));
        lib.check_invariants().unwrap();
    }

    #[test]
    fn test_merge_loaded_keeps_local_adds_and_marks() {
        let mut lib = Library::default();
        lib.append(entry(5, "Tunic", Membership::Playing));
        lib.append(entry(2, "Celeste", Membership::Playing));
        lib.mark_pending_removal(2);

        let loaded = Library::from_entries(vec![
            entry(1, "Hades", Membership::Wishlist),
            entry(2, "Celeste", Membership::Wishlist),
            entry(3, "Inside", Membership::Playing),
        ]);
        lib.merge_loaded(loaded);

        assert_eq!(ids(&lib, Membership::Playing), vec![3, 5, 2]);
        assert_eq!(ids(&lib, Membership::Wishlist), vec![1]);
        assert!(lib.is_pending_removal(2));
        lib.check_invariants().unwrap();
    }

    #[test]
    fn test_merge_into_empty_is_the_load() {
        let mut lib = Library::default();
        let loaded = Library::from_entries(vec![entry(1, "Hades", Membership::Wishlist)]);
        lib.merge_loaded(loaded.clone());
        assert_eq!(lib, loaded);
    }

    #[test]
    fn test_tracking_by_catalog_id() {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Wishlist));
        assert_eq!(lib.tracking(1001), Some(Membership::Wishlist));
        assert_eq!(lib.tracking(5), None);
    }

    #[test]
    fn test_invariant_violation_detected() {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Wishlist));
        lib.collection_mut(Membership::Wishlist)[0].membership = Membership::Playing;
        assert!(lib.check_invariants().is_err());
    }
}
