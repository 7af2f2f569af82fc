//! Game Card Component
//!
//! A draggable cover card. Playing cards show a platform badge.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{GameEntry, Membership};
use crate::store::AppStateStoreFields;

#[component]
pub fn GameCard(game: GameEntry, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let id = game.id;
    let library = ctx.store.library();

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_item_mouseenter(dnd, id);
    let on_mouseleave = make_on_item_mouseleave(dnd, game.membership.as_str());

    let card_class = move || {
        let mut c = String::from("game-card");
        if ctx.drag.with(|d| d.is_suppressed(id)) { c.push_str(" dragging"); }
        if matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(tid)) if tid == id) {
            c.push_str(" drop-target");
        }
        if library.read().is_pending_removal(id) { c.push_str(" removing"); }
        c
    };

    let badge = (game.membership == Membership::Playing).then(|| {
        let platform = game.display_platform();
        view! { <span class=platform.badge_class()>{platform.label()}</span> }
    });

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=move |_| {
                // A drop also fires click on the card underneath
                if !dnd.drag_just_ended_read.get_untracked() {
                    ctx.open_checklist.set(Some(id));
                }
            }
        >
            <img class="game-cover" src=game.cover_url.clone() alt=game.name.clone() draggable="false" />
            <h3 class="game-name">{game.name.clone()}</h3>
            {badge}
            <DeleteConfirmButton on_confirm=move |_| ctx.remove_game(id) />
        </div>
    }
}
