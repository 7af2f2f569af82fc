//! Reconciliation Flow
//!
//! Applies library changes locally and keeps the backend in step.
//! Gestures and completions arrive as `Command`s; each dispatch returns the
//! toast to show, if any.

use crate::backend::GameBackend;
use crate::models::{CatalogGame, GameId, Membership, NewGame, Platform};
use crate::store::{Library, LibraryHandle};

/// Fade-out time before a confirmed removal hits the backend
pub const REMOVE_FADE_MS: u32 = 300;

/// User-visible outcome of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Library mutations requested by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a search result to a collection
    AddRequested {
        game: CatalogGame,
        to: Membership,
        platform: Option<Platform>,
    },
    /// Move a game across collections
    MoveRequested { id: GameId, to: Membership },
    /// Start the fade-out of a game
    RemoveRequested { id: GameId },
    /// Fade-out finished, delete it
    RemoveConfirmed { id: GameId },
}

/// Next step after the user picks "add" on a search result
#[derive(Debug, Clone, PartialEq)]
pub enum AddStep {
    /// "Playing" needs a platform before anything is created
    ChoosePlatform(CatalogGame),
    Ready(Command),
}

/// Wishlist adds go straight through; playing adds ask for a platform first
pub fn begin_add(game: CatalogGame, to: Membership) -> AddStep {
    match to {
        Membership::Playing => AddStep::ChoosePlatform(game),
        Membership::Wishlist => AddStep::Ready(Command::AddRequested {
            game,
            to,
            platform: None,
        }),
    }
}

/// Drives commands against a library and a backend
#[derive(Clone, Copy)]
pub struct Reconciler<L, B> {
    library: L,
    backend: B,
}

impl<L: LibraryHandle, B: GameBackend> Reconciler<L, B> {
    pub fn new(library: L, backend: B) -> Self {
        Self { library, backend }
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub async fn dispatch(&self, command: Command) -> Option<Notice> {
        tracing::debug!("[RECONCILE] {:?}", command);
        match command {
            Command::AddRequested { game, to, platform } => Some(self.add(game, to, platform).await),
            Command::MoveRequested { id, to } => self.move_game(id, to).await,
            Command::RemoveRequested { id } => {
                self.request_removal(id);
                None
            }
            Command::RemoveConfirmed { id } => self.remove(id).await,
        }
    }

    /// Start the fade-out. False if the game is unknown or already leaving,
    /// in which case no `RemoveConfirmed` should follow.
    pub fn request_removal(&self, id: GameId) -> bool {
        let marked = self.library.mutate(|lib| lib.mark_pending_removal(id));
        if !marked {
            tracing::debug!("[RECONCILE] remove {} ignored, unknown or already pending", id);
        }
        marked
    }

    async fn add(&self, game: CatalogGame, to: Membership, platform: Option<Platform>) -> Notice {
        if let Some(existing) = self.library.inspect(|lib| lib.tracking(game.id)) {
            return Notice::Error(format!("{} is already in {}", game.name, existing.label()));
        }
        if to == Membership::Playing && platform.is_none() {
            return Notice::Error(format!("Pick a platform for {}", game.name));
        }

        let new_game = NewGame::from_catalog(&game, to, platform);
        match self.backend.create_game(&new_game).await {
            Ok(mut entry) => {
                // tag must match the collection it lands in
                entry.membership = to;
                self.library.mutate(|lib| lib.append(entry));
                tracing::info!("[RECONCILE] added {} to {}", game.name, to.as_str());
                Notice::Success(format!("{} added to {}", game.name, to.label()))
            }
            Err(e) => {
                tracing::warn!("[RECONCILE] add {} failed: {}", game.name, e);
                Notice::Error(format!("Could not add {}: {}", game.name, e))
            }
        }
    }

    async fn move_game(&self, id: GameId, to: Membership) -> Option<Notice> {
        let name = self.library.inspect(|lib| {
            if lib.is_pending_removal(id) {
                None
            } else {
                lib.find(id).map(|entry| entry.name.clone())
            }
        });
        let Some(name) = name else {
            tracing::debug!("[RECONCILE] move {} ignored, unknown or being removed", id);
            return None;
        };
        let (from, index) = self.library.mutate(|lib| lib.move_entry(id, to))?;

        match self.backend.update_game_membership(id, to).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("[RECONCILE] move {} -> {} failed, rolling back: {}", id, to.as_str(), e);
                self.library.mutate(|lib| lib.restore(id, from, index));
                Some(Notice::Error(format!("Could not move {}: {}", name, e)))
            }
        }
    }

    async fn remove(&self, id: GameId) -> Option<Notice> {
        // One delete per removal, however often the confirm arrives
        let name = self.library.mutate(|lib| {
            let name = lib.find(id).map(|entry| entry.name.clone())?;
            lib.begin_delete(id).then_some(name)
        })?;

        match self.backend.delete_game(id).await {
            Ok(()) => {
                self.library.mutate(|lib| lib.remove(id));
                tracing::info!("[RECONCILE] removed {}", name);
                Some(Notice::Success(format!("{} removed", name)))
            }
            Err(e) => {
                tracing::warn!("[RECONCILE] remove {} failed: {}", name, e);
                self.library.mutate(|lib| lib.clear_pending_removal(id));
                Some(Notice::Error(format!("Could not remove {}: {}", name, e)))
            }
        }
    }
}

/// Load both collections from the backend
pub async fn load_library<B: GameBackend>(backend: &B) -> Result<Library, String> {
    let entries = backend.list_games().await?;
    tracing::info!("[RECONCILE] loaded {} games", entries.len());
    Ok(Library::from_entries(entries))
}
