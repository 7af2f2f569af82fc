//! Game Shelf Frontend App
//!
//! Search bar on top, the two collections side by side below.

use leptos::prelude::*;
use leptos_dragdrop::*;
use reactive_stores::Store;

use crate::components::{GameGrid, PlatformModal, SearchBar, TaskChecklist, Toaster};
use crate::context::AppContext;
use crate::models::Membership;
use crate::store::{use_app_store, AppState};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::new()));
    let ctx = AppContext::new(use_app_store());
    provide_context(ctx);

    // DnD
    let dnd = create_dnd_signals();
    bind_global_handlers(
        dnd,
        move |id| ctx.drag_start(id),
        move |_id, target| ctx.drag_end(target),
    );

    // Initial load
    ctx.reload();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Game Shelf"</h1>
                <SearchBar />
            </header>

            <main class="collections">
                {Membership::ALL.iter().map(|membership| {
                    view! { <GameGrid membership=*membership dnd=dnd /> }
                }).collect_view()}
            </main>

            <PlatformModal />
            <TaskChecklist />
            <Toaster />
        </div>
    }
}
