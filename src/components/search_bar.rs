//! Search Bar Component
//!
//! Catalog search with debounced queries and a result dropdown.
//! Clicking a result adds it to "playing" (after a platform choice);
//! the heart button adds it to the wishlist.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::backend::{CatalogClient, TauriBackend};
use crate::context::use_app_context;
use crate::models::{CatalogGame, Membership};
use crate::reconcile::{begin_add, AddStep};
use crate::search::SEARCH_DEBOUNCE_MS;
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let search = ctx.store.search();
    let (selected_idx, set_selected_idx) = signal(0usize);

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        set_selected_idx.set(0);
        let Some(ticket) = search.write().begin(&input.value()) else {
            return;
        };
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // A newer keystroke owns the request
            if !search.read_untracked().is_current(&ticket) {
                return;
            }
            let result = TauriBackend.search_by_name(&ticket.query).await;
            if let Err(e) = &result {
                tracing::warn!("[SEARCH] {:?} failed: {}", ticket.query, e);
            }
            search.write().complete(&ticket, result);
        });
    };

    let add = move |game: CatalogGame, to: Membership| {
        search.write().close();
        match begin_add(game, to) {
            AddStep::ChoosePlatform(game) => ctx.pending_add.set(Some(game)),
            AddStep::Ready(command) => ctx.dispatch(command),
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let count = search.read_untracked().results.len();
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < count {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                let picked = search.read_untracked().results.get(selected_idx.get()).cloned();
                if let Some(game) = picked {
                    add(game, Membership::Playing);
                }
            }
            "Escape" => search.write().close(),
            _ => {}
        }
    };

    view! {
        <div class="search-wrapper">
            <input
                type="search"
                class="search-input"
                placeholder="Search for a game..."
                autocomplete="off"
                aria-label="Search games"
                prop:value=move || search.read().query.clone()
                on:input=on_input
                on:focus=move |_| search.write().focus()
                on:keydown=on_keydown
            />

            <Show when=move || search.read().open>
                <ul class="search-results">
                    {move || {
                        let state = search.read();
                        if state.loading {
                            view! { <li class="search-status">"Searching..."</li> }.into_any()
                        } else if let Some(err) = state.error.clone() {
                            view! { <li class="search-status error">{err}</li> }.into_any()
                        } else if state.results.is_empty() {
                            view! { <li class="search-status">"No games match your search."</li> }.into_any()
                        } else {
                            let selected = selected_idx.get();
                            state.results.iter().cloned().enumerate().map(|(i, game)| {
                                let for_click = game.clone();
                                let for_heart = game.clone();
                                view! {
                                    <li
                                        class=if i == selected { "search-result selected" } else { "search-result" }
                                        on:click=move |_| add(for_click.clone(), Membership::Playing)
                                    >
                                        <img class="search-cover" src=game.cover_url.clone() alt=game.name.clone() />
                                        <span class="search-name">{game.name.clone()}</span>
                                        <button
                                            class="wishlist-btn"
                                            title="Add to wishlist"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                add(for_heart.clone(), Membership::Wishlist);
                                            }
                                        >
                                            "♥"
                                        </button>
                                    </li>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </ul>
            </Show>
        </div>
    }
}
