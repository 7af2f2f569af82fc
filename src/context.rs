//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::TauriBackend;
use crate::drag::DragController;
use crate::models::{CatalogGame, GameId};
use crate::reconcile::{self, Command, Notice, Reconciler, REMOVE_FADE_MS};
use crate::store::{store_push_notice, store_set_library, AppStore, LibraryHandle};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    reconciler: Reconciler<AppStore, TauriBackend>,
    /// Current drag gesture, read by cards for visual suppression
    pub drag: RwSignal<DragController>,
    /// Game whose checklist modal is open
    pub open_checklist: RwSignal<Option<GameId>>,
    /// Search result waiting for a platform choice
    pub pending_add: RwSignal<Option<CatalogGame>>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            reconciler: Reconciler::new(store, TauriBackend),
            drag: RwSignal::new(DragController::default()),
            open_checklist: RwSignal::new(None),
            pending_add: RwSignal::new(None),
        }
    }

    /// Run a command in the background and toast its outcome
    pub fn dispatch(&self, command: Command) {
        let ctx = *self;
        spawn_local(async move {
            if let Some(notice) = ctx.reconciler.dispatch(command).await {
                ctx.notify(notice);
            }
        });
    }

    /// Fade the card out, then delete it
    pub fn remove_game(&self, id: GameId) {
        let ctx = *self;
        spawn_local(async move {
            if !ctx.reconciler.request_removal(id) {
                return;
            }
            gloo_timers::future::TimeoutFuture::new(REMOVE_FADE_MS).await;
            if let Some(notice) = ctx.reconciler.dispatch(Command::RemoveConfirmed { id }).await {
                ctx.notify(notice);
            }
        });
    }

    /// Load both collections from the backend
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            match reconcile::load_library(&TauriBackend).await {
                Ok(library) => store_set_library(&ctx.store, library),
                Err(e) => {
                    tracing::error!("[APP] loading library failed: {}", e);
                    store_set_library(&ctx.store, Default::default());
                    ctx.notify(Notice::Error(format!("Could not load your games: {}", e)));
                }
            }
        });
    }

    pub fn notify(&self, notice: Notice) {
        store_push_notice(&self.store, notice);
    }

    /// Start holding a dragged game
    pub fn drag_start(&self, id: GameId) {
        let store = self.store;
        self.drag.update(|ctl| {
            store.inspect(|lib| ctl.start(lib, id));
        });
    }

    /// Finish the gesture and hand a cross-collection move to the flow
    pub fn drag_end(&self, target: Option<leptos_dragdrop::DropTarget>) {
        let store = self.store;
        let command = self
            .drag
            .try_update(|ctl| store.inspect(|lib| ctl.finish(lib, target)))
            .flatten();
        if let Some(command) = command {
            self.dispatch(command);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
