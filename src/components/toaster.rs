//! Toaster Component
//!
//! Shows queued notices and drops each one after a short delay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{store_pop_notice, AppStateStoreFields};

const NOTICE_TTL_MS: u32 = 3000;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();
    let notices = ctx.store.notices();

    // Every new notice schedules one pop of the oldest
    Effect::new(move |prev: Option<usize>| {
        let count = notices.read().len();
        let prev = prev.unwrap_or(0);
        for _ in prev..count {
            let store = ctx.store;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                store_pop_notice(&store);
            });
        }
        count
    });

    view! {
        <div class="toaster" role="status">
            {move || notices.read().iter().map(|notice| {
                let class = if notice.is_error() { "toast error" } else { "toast success" };
                view! { <div class=class>{notice.text().to_string()}</div> }
            }).collect_view()}
        </div>
    }
}
