//! Task Checklist Component
//!
//! Modal listing a game's tasks. Completed tasks collapse into their own
//! section at the bottom.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::backend::{GameBackend, TauriBackend};
use crate::context::{use_app_context, AppContext};
use crate::models::{GameId, TaskEntry};
use crate::reconcile::Notice;
use crate::store::AppStateStoreFields;
use crate::tasks;

/// Apply a refetched task list, or toast the failure
fn apply(ctx: AppContext, set_tasks: WriteSignal<Vec<TaskEntry>>, result: Result<Vec<TaskEntry>, String>) {
    match result {
        Ok(list) => set_tasks.set(list),
        Err(e) => {
            tracing::error!("[TASKS] {}", e);
            ctx.notify(Notice::Error(format!("Could not update tasks: {}", e)));
        }
    }
}

#[component]
pub fn TaskChecklist() -> impl IntoView {
    let ctx = use_app_context();
    let library = ctx.store.library();
    let (tasks, set_tasks) = signal(Vec::<TaskEntry>::new());
    let (new_text, set_new_text) = signal(String::new());
    let (show_completed, set_show_completed) = signal(false);

    // Load whenever a different game is opened
    Effect::new(move |_| {
        let Some(game_id) = ctx.open_checklist.get() else {
            set_tasks.set(Vec::new());
            return;
        };
        spawn_local(async move {
            let result = TauriBackend.list_tasks(game_id).await;
            if ctx.open_checklist.get_untracked() == Some(game_id) {
                apply(ctx, set_tasks, result);
            }
        });
    });

    let game_name = move || {
        ctx.open_checklist
            .get()
            .and_then(|id| library.read().find(id).map(|g| g.name.clone()))
            .unwrap_or_default()
    };

    let close = move || {
        ctx.open_checklist.set(None);
        set_new_text.set(String::new());
    };

    let submit = move |game_id: GameId| {
        let text = new_text.get_untracked();
        spawn_local(async move {
            match tasks::add_task(&TauriBackend, game_id, &text).await {
                Ok(Some(list)) => {
                    set_new_text.set(String::new());
                    set_tasks.set(list);
                }
                Ok(None) => {}
                Err(e) => apply(ctx, set_tasks, Err(e)),
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(id) = ctx.open_checklist.get_untracked() {
                submit(id);
            }
        }
    };

    let render_task = move |task: TaskEntry| {
        let for_toggle = task.clone();
        let for_delete = task.clone();
        view! {
            <li class=if task.completed { "task completed" } else { "task" }>
                <input
                    type="checkbox"
                    prop:checked=task.completed
                    on:change=move |_| {
                        let task = for_toggle.clone();
                        spawn_local(async move {
                            apply(ctx, set_tasks, tasks::toggle_task(&TauriBackend, &task).await);
                        });
                    }
                />
                <span class="task-text">{task.text.clone()}</span>
                <button
                    class="delete-btn"
                    title="Delete task"
                    on:click=move |_| {
                        let task = for_delete.clone();
                        spawn_local(async move {
                            apply(ctx, set_tasks, tasks::delete_task(&TauriBackend, &task).await);
                        });
                    }
                >
                    "×"
                </button>
            </li>
        }
    };

    view! {
        <Show when=move || {
            // The game may disappear while its checklist is open
            ctx.open_checklist.get().is_some_and(|id| library.read().find(id).is_some())
        }>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal checklist" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h2>{game_name}</h2>
                        <button class="close-btn" on:click=move |_| close()>"×"</button>
                    </header>

                    <div class="task-input-row">
                        <input
                            type="text"
                            placeholder="Add a task..."
                            prop:value=move || new_text.get()
                            on:input=move |ev| {
                                if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                                    set_new_text.set(input.value());
                                }
                            }
                            on:keydown=on_keydown
                        />
                        <button on:click=move |_| {
                            if let Some(id) = ctx.open_checklist.get_untracked() {
                                submit(id);
                            }
                        }>"Add"</button>
                    </div>

                    {move || {
                        let (active, completed) = tasks::partition(&tasks.get());
                        let completed_count = completed.len();
                        view! {
                            <ul class="task-list">
                                {if active.is_empty() && completed_count == 0 {
                                    view! { <li class="task-empty">"No tasks yet."</li> }.into_any()
                                } else {
                                    active.into_iter().map(render_task).collect_view().into_any()
                                }}
                            </ul>
                            <Show when=move || { completed_count > 0 }>
                                <button
                                    class="completed-toggle"
                                    on:click=move |_| set_show_completed.update(|v| *v = !*v)
                                >
                                    {move || format!(
                                        "{} Completed ({})",
                                        if show_completed.get() { "▾" } else { "▸" },
                                        completed_count,
                                    )}
                                </button>
                            </Show>
                            <Show when=move || show_completed.get()>
                                <ul class="task-list completed-list">
                                    {completed.clone().into_iter().map(render_task).collect_view()}
                                </ul>
                            </Show>
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
