//! Platform Modal Component
//!
//! Asks which platform a game is played on before adding it to "playing".

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Membership, Platform};
use crate::reconcile::Command;

#[component]
pub fn PlatformModal() -> impl IntoView {
    let ctx = use_app_context();

    let choose = move |platform: Platform| {
        if let Some(game) = ctx.pending_add.get_untracked() {
            ctx.pending_add.set(None);
            ctx.dispatch(Command::AddRequested {
                game,
                to: Membership::Playing,
                platform: Some(platform),
            });
        }
    };

    view! {
        <Show when=move || ctx.pending_add.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| ctx.pending_add.set(None)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>
                        {move || ctx.pending_add.get().map(|g| format!("Where are you playing {}?", g.name))}
                    </h2>
                    <div class="platform-selector">
                        {Platform::ALL.iter().map(|platform| {
                            let platform = *platform;
                            view! {
                                <button class=platform.badge_class() on:click=move |_| choose(platform)>
                                    {platform.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <button class="cancel-btn" on:click=move |_| ctx.pending_add.set(None)>"Cancel"</button>
                </div>
            </div>
        </Show>
    }
}
