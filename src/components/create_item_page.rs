//! Create Item Page
//!
//! Draft form with client-side validation. On success the listing is
//! reopened only after the success notice has had its minimum display time.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use curio_core::domain::FieldErrors;
use curio_core::viewmodel::{CreateModel, CreateState};

use super::field_errors::field_error_text;
use crate::context::AppContext;

/// Minimum time the success notice stays visible before navigating
const SUCCESS_NOTICE_MS: u32 = 1000;

#[component]
pub fn CreateItemPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let model = CreateModel::new(ctx.store());
    let navigate = use_navigate();

    let (state, set_state) = signal(CreateState::new());

    // Live input buffer; folded into the draft on submit
    let (draft_name, set_draft_name) = signal(String::new());
    let (draft_description, set_draft_description) = signal(String::new());

    let submitting = move || matches!(state.get(), CreateState::Submitting { .. });

    let errors = move || match state.get() {
        CreateState::Drafting { errors, .. } => errors,
        _ => FieldErrors::default(),
    };

    let on_submit = Callback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_state.update(|s| {
            CreateModel::edit_name(s, draft_name.get_untracked());
            CreateModel::edit_description(s, draft_description.get_untracked());
        });
        let Some(next) = CreateModel::begin_submit(&state.get_untracked()) else {
            return;
        };
        set_state.set(next.clone());
        if let CreateState::Submitting { draft } = next {
            let model = model.clone();
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                let after = model.submit(draft).await;
                match &after {
                    CreateState::Created { item } => {
                        web_sys::console::log_1(
                            &format!("[CREATE] Item {} created", item.id).into(),
                        );
                        ctx.notify_success(
                            "Item created successfully!",
                            &format!("{} has been added to your items.", item.name),
                        );
                        let _ = set_state.try_set(after.clone());
                        // Keep the notice on screen before leaving the page
                        TimeoutFuture::new(SUCCESS_NOTICE_MS).await;
                        navigate("/items", NavigateOptions::default());
                    }
                    CreateState::Drafting {
                        store_error: Some(message),
                        ..
                    } => {
                        ctx.notify_error("Failed to create item", message);
                        let _ = set_state.try_set(after.clone());
                    }
                    _ => {
                        let _ = set_state.try_set(after.clone());
                    }
                }
            });
        }
    });

    view! {
        <div class="create-page">
            <div class="create-header">
                <h1>"Create Item"</h1>
                <a class="back-link" href="/items">"Back to Items"</a>
            </div>

            <form class="item-form" novalidate=true on:submit=move |ev| on_submit.run(ev)>
                <div class="form-field">
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        autofocus=true
                        placeholder="Enter item name"
                        disabled=submitting
                        prop:value=move || draft_name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft_name.set(input.value());
                        }
                    />
                    {move || {
                        field_error_text("Name", &errors().name)
                            .map(|message| view! { <p class="field-error">{message}</p> })
                    }}
                </div>

                <div class="form-field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="4"
                        placeholder="Describe the item"
                        disabled=submitting
                        prop:value=move || draft_description.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_draft_description.set(input.value());
                        }
                    ></textarea>
                    {move || {
                        field_error_text("Description", &errors().description)
                            .map(|message| view! { <p class="field-error">{message}</p> })
                    }}
                </div>

                {move || match state.get() {
                    CreateState::Drafting { store_error: Some(message), .. } => {
                        Some(view! { <p class="action-error">{message}</p> })
                    }
                    _ => None,
                }}

                <button class="button wide" type="submit" disabled=submitting>
                    {move || if submitting() { "Creating..." } else { "Create Item" }}
                </button>
            </form>
        </div>
    }
}
