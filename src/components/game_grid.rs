//! Game Grid Component
//!
//! One collection rendered as a drop container of game cards.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::GameCard;
use crate::context::use_app_context;
use crate::models::Membership;
use crate::store::AppStateStoreFields;

#[component]
pub fn GameGrid(membership: Membership, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let library = ctx.store.library();
    let container = membership.as_str();

    let on_mouseenter = make_on_container_mouseenter(dnd, container);
    let on_mouseleave = make_on_container_mouseleave(dnd, container);

    let entries = move || library.read().collection(membership).to_vec();
    let is_active = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Container(c)) if c == container)
    };

    view! {
        <section class="collection">
            <h2>{membership.label()}</h2>
            <div
                class=move || if is_active() { format!("game-grid {} drop-active", container) } else { format!("game-grid {}", container) }
                on:mouseenter=on_mouseenter
                on:mouseleave=on_mouseleave
            >
                <Show
                    when=move || !ctx.store.loading().get()
                    fallback=|| view! { <div class="grid-skeleton">"Loading..."</div> }
                >
                    <Show
                        when=move || !entries().is_empty()
                        fallback=|| view! {
                            <div class="empty-list">
                                <p>"This list is empty"</p>
                                <p class="hint">"Drag games here or add new ones."</p>
                            </div>
                        }
                    >
                        <For
                            each=entries
                            key=|game| (game.id, game.membership, game.platform)
                            children=move |game| view! { <GameCard game=game dnd=dnd /> }
                        />
                    </Show>
                </Show>
            </div>
        </section>
    }
}
