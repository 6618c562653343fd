//! Todo Dashboard Component
//!
//! The task list: add, toggle, inline edit, delete. Each handler is one
//! remote round trip followed by a per-id local merge (see `store`);
//! nothing is re-fetched after a mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::callback::LOGIN_ROUTE;
use crate::components::NavBar;
use crate::context::SessionContext;
use crate::models::Task;
use crate::store;

#[component]
pub fn TodoDashboard() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = StoredValue::new(use_navigate());

    let (todos, set_todos) = signal(Vec::<Task>::new());
    let (input, set_input) = signal(String::new());
    let (edit_input, set_edit_input) = signal(String::new());
    let (edit_id, set_edit_id) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Redirect to login once session resolution completes with no user
    Effect::new(move |_| {
        if !session.loading.get() && session.user.get().is_none() {
            navigate.with_value(|nav| nav(LOGIN_ROUTE, Default::default()));
        }
    });

    // Fetch the owned task list when the user becomes known
    Effect::new(move |_| {
        let Some(user) = session.user.get() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_tasks(&user.id).await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[TASKS] Loaded {} tasks", loaded.len()).into(),
                    );
                    set_todos.set(loaded);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let add_todo = move || {
        let Some(user) = session.user.get_untracked() else {
            return;
        };
        let text = store::normalize_text(&input.get_untracked());
        // The input clears whether or not anything was submitted
        set_input.set(String::new());
        let Some(text) = text else { return };
        set_saving.set(true);
        spawn_local(async move {
            match api::create_task(&user.id, &text).await {
                Ok(created) => set_todos.update(|tasks| tasks.push(created)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_saving.set(false);
        });
    };

    let toggle_complete = move |id: String, completed: bool| {
        let Some(user) = session.user.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::set_completed(&id, &user.id, !completed).await {
                Ok(()) => set_todos.update(|tasks| store::toggle_task(tasks, &id)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let start_edit = move |id: String, text: String| {
        set_edit_id.set(Some(id));
        set_edit_input.set(text);
    };

    let cancel_edit = move || {
        set_edit_id.set(None);
        set_edit_input.set(String::new());
    };

    let save_edit = move |id: String| {
        let Some(user) = session.user.get_untracked() else {
            return;
        };
        let text = edit_input.get_untracked();
        // Edit mode exits whether or not the save lands
        set_edit_id.set(None);
        set_edit_input.set(String::new());
        spawn_local(async move {
            match api::set_text(&id, &user.id, &text).await {
                Ok(()) => set_todos.update(|tasks| store::set_task_text(tasks, &id, &text)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let delete_todo = move |id: String| {
        let Some(user) = session.user.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_task(&id, &user.id).await {
                Ok(()) => set_todos.update(|tasks| store::remove_task(tasks, &id)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="todo-page">
            <NavBar/>
            <main class="todo-main">
                <div class="todo-card">
                    <h1>"Todo Dashboard"</h1>
                    {move || error.get().map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <div class="add-row">
                        <input
                            type="text"
                            placeholder="Add a new task..."
                            prop:value=move || input.get()
                            disabled=move || saving.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    add_todo();
                                }
                            }
                        />
                        <button
                            class="btn primary"
                            disabled=move || saving.get()
                            on:click=move |_| add_todo()
                        >
                            "Add"
                        </button>
                    </div>

                    {move || if loading.get() {
                        view! { <div class="muted todo-placeholder">"Loading..."</div> }.into_any()
                    } else {
                        view! {
                            <ul class="todo-list">
                                <Show when=move || todos.get().is_empty()>
                                    <li class="muted todo-placeholder">"No tasks yet. Add one!"</li>
                                </Show>
                                <For
                                    each=move || todos.get()
                                    // Text and completion participate in the key so a merged
                                    // mutation re-renders its row
                                    key=|task| (task.id.clone(), task.completed, task.text.clone())
                                    children=move |task: Task| {
                                        let id = StoredValue::new(task.id.clone());
                                        let text = StoredValue::new(task.text.clone());
                                        let completed = task.completed;
                                        let is_editing = move || edit_id.get() == Some(id.get_value());
                                        view! {
                                            <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
                                                <input
                                                    type="checkbox"
                                                    checked=completed
                                                    on:change=move |_| toggle_complete(id.get_value(), completed)
                                                />
                                                {move || if is_editing() {
                                                    view! {
                                                        <span class="todo-edit">
                                                            <input
                                                                type="text"
                                                                prop:value=move || edit_input.get()
                                                                on:input=move |ev| set_edit_input.set(event_target_value(&ev))
                                                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                                    if ev.key() == "Enter" {
                                                                        save_edit(id.get_value());
                                                                    }
                                                                    if ev.key() == "Escape" {
                                                                        cancel_edit();
                                                                    }
                                                                }
                                                            />
                                                            <button class="btn small" on:click=move |_| save_edit(id.get_value())>"Save"</button>
                                                            <button class="btn small outline" on:click=move |_| cancel_edit()>"Cancel"</button>
                                                        </span>
                                                    }.into_any()
                                                } else {
                                                    view! {
                                                        <span class="todo-body">
                                                            <span class="todo-text">{text.get_value()}</span>
                                                            <span class="todo-actions">
                                                                <button
                                                                    class="btn small outline"
                                                                    on:click=move |_| start_edit(id.get_value(), text.get_value())
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="btn small danger"
                                                                    on:click=move |_| delete_todo(id.get_value())
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </span>
                                                        </span>
                                                    }.into_any()
                                                }}
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }.into_any()
                    }}
                </div>
            </main>
        </div>
    }
}
