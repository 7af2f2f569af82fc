//! Drag Interaction Controller
//!
//! Turns drag gestures over the two game grids into membership changes.
//! Gesture plumbing lives in `leptos-dragdrop`; this module only decides.

use leptos_dragdrop::DropTarget;

use crate::models::{GameId, Membership};
use crate::reconcile::Command;
use crate::store::Library;

/// The gesture in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub source_id: GameId,
    pub source: Membership,
}

#[derive(Debug, Default, Clone)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Hold the dragged entry. Unknown ids and entries being removed leave
    /// the controller idle.
    pub fn start(&mut self, library: &Library, id: GameId) -> bool {
        if library.is_pending_removal(id) {
            tracing::debug!("[DND] drag start on game {} being removed", id);
            self.session = None;
            return false;
        }
        match library.membership_of(id) {
            Some(source) => {
                self.session = Some(DragSession { source_id: id, source });
                true
            }
            None => {
                tracing::debug!("[DND] drag start on unknown game {}", id);
                self.session = None;
                false
            }
        }
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Dragged entry is hidden in its original slot while the session lives
    pub fn is_suppressed(&self, id: GameId) -> bool {
        self.session.is_some_and(|s| s.source_id == id)
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// End the gesture. Returns a move only for a drop on the other
    /// collection; everything else is a silent no-op.
    pub fn finish(&mut self, library: &Library, target: Option<DropTarget>) -> Option<Command> {
        let session = self.session.take()?;
        let target = resolve_container(library, target?)?;
        if target == session.source {
            return None;
        }
        Some(Command::MoveRequested {
            id: session.source_id,
            to: target,
        })
    }
}

/// Container named by the drop target, directly or via the item under the cursor
pub fn resolve_container(library: &Library, target: DropTarget) -> Option<Membership> {
    match target {
        DropTarget::Container(name) => Membership::from_str(name),
        DropTarget::Item(id) => library.membership_of(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::entry;

    fn library() -> Library {
        let mut lib = Library::default();
        lib.append(entry(1, "Hades", Membership::Wishlist));
        lib.append(entry(2, "Celeste", Membership::Wishlist));
        lib.append(entry(3, "Tunic", Membership::Playing));
        lib
    }

    #[test]
    fn test_drop_on_other_container() {
        let lib = library();
        let mut ctl = DragController::default();
        assert!(ctl.start(&lib, 1));
        assert!(ctl.is_suppressed(1));
        assert!(!ctl.is_suppressed(2));

        let cmd = ctl.finish(&lib, Some(DropTarget::Container("playing")));

        assert_eq!(cmd, Some(Command::MoveRequested { id: 1, to: Membership::Playing }));
        assert_eq!(ctl.session(), None);
    }

    #[test]
    fn test_drop_on_item_resolves_its_container() {
        let lib = library();
        let mut ctl = DragController::default();
        ctl.start(&lib, 3);

        let cmd = ctl.finish(&lib, Some(DropTarget::Item(2)));

        assert_eq!(cmd, Some(Command::MoveRequested { id: 3, to: Membership::Wishlist }));
    }

    #[test]
    fn test_drop_within_same_container_is_noop() {
        let lib = library();
        let mut ctl = DragController::default();
        ctl.start(&lib, 1);
        assert_eq!(ctl.finish(&lib, Some(DropTarget::Item(2))), None);

        ctl.start(&lib, 1);
        assert_eq!(ctl.finish(&lib, Some(DropTarget::Container("wishlist"))), None);
    }

    #[test]
    fn test_drop_without_target_aborts() {
        let lib = library();
        let mut ctl = DragController::default();
        ctl.start(&lib, 1);

        assert_eq!(ctl.finish(&lib, None), None);
        assert!(!ctl.is_suppressed(1));
    }

    #[test]
    fn test_unresolvable_target_aborts() {
        let lib = library();
        let mut ctl = DragController::default();
        ctl.start(&lib, 1);
        assert_eq!(ctl.finish(&lib, Some(DropTarget::Container("backlog"))), None);

        ctl.start(&lib, 1);
        assert_eq!(ctl.finish(&lib, Some(DropTarget::Item(99))), None);
        assert_eq!(ctl.session(), None);
    }

    #[test]
    fn test_unknown_source_never_moves() {
        let lib = library();
        let mut ctl = DragController::default();

        assert!(!ctl.start(&lib, 42));
        assert_eq!(ctl.finish(&lib, Some(DropTarget::Container("playing"))), None);
    }

    #[test]
    fn test_game_being_removed_cannot_be_dragged() {
        let mut lib = library();
        lib.mark_pending_removal(1);
        let mut ctl = DragController::default();

        assert!(!ctl.start(&lib, 1));
        assert!(!ctl.is_suppressed(1));
        assert_eq!(ctl.finish(&lib, Some(DropTarget::Container("playing"))), None);
    }

    #[test]
    fn test_cancel_clears_session() {
        let lib = library();
        let mut ctl = DragController::default();
        ctl.start(&lib, 2);
        ctl.cancel();
        assert_eq!(ctl.session(), None);
    }
}
