//! Item Detail Page
//!
//! Read view with an edit mode and a two-step delete, driven by the detail
//! state machine. Deletion success navigates back to the listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use curio_core::domain::{FieldErrors, Item};
use curio_core::viewmodel::{DetailModel, DetailState};

use super::field_errors::field_error_text;
use crate::context::AppContext;

#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let model = DetailModel::new(ctx.store());
    let navigate = use_navigate();

    let params = use_params_map();
    let id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok())));

    let (state, set_state) = signal(DetailState::Loading);

    // Live input buffer while editing; seeded from the draft on edit start
    // and folded back into the state machine on save
    let (draft_name, set_draft_name) = signal(String::new());
    let (draft_description, set_draft_description) = signal(String::new());

    // Fetch when the routed id changes; an unparsable id is simply not found
    let load_model = model.clone();
    Effect::new(move |_| match id.get() {
        Some(target) => {
            set_state.set(DetailState::Loading);
            let model = load_model.clone();
            spawn_local(async move {
                let next = model.load(target).await;
                // Drop the response if the route moved on to another id
                if id.try_get_untracked() == Some(Some(target)) {
                    let _ = set_state.try_set(next);
                }
            });
        }
        None => set_state.set(DetailState::NotFound),
    });

    // Leave the page once the item is gone
    Effect::new(move |_| {
        if matches!(state.get(), DetailState::Deleted) {
            navigate("/items", NavigateOptions::default());
        }
    });

    let on_edit = Callback::new(move |_: ()| {
        if let Some(next) = DetailModel::begin_edit(&state.get_untracked()) {
            if let DetailState::Editing { draft, .. } = &next {
                set_draft_name.set(draft.name.clone());
                set_draft_description.set(draft.description.clone());
            }
            set_state.set(next);
        }
    });

    let on_cancel_edit = Callback::new(move |_: ()| {
        if let Some(next) = DetailModel::cancel_edit(&state.get_untracked()) {
            set_state.set(next);
        }
    });

    let save_model = model.clone();
    let on_save = Callback::new(move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Fold the input buffer into the draft before validating
        set_state.update(|s| {
            DetailModel::edit_name(s, draft_name.get_untracked());
            DetailModel::edit_description(s, draft_description.get_untracked());
        });
        let Some(next) = DetailModel::begin_save(&state.get_untracked()) else {
            return;
        };
        set_state.set(next.clone());
        if let DetailState::Saving { item, draft } = next {
            let model = save_model.clone();
            spawn_local(async move {
                let after = model.save(item, draft).await;
                let _ = set_state.try_set(after);
            });
        }
    });

    let on_request_delete = Callback::new(move |_: ()| {
        if let Some(next) = DetailModel::request_delete(&state.get_untracked()) {
            set_state.set(next);
        }
    });

    let on_cancel_delete = Callback::new(move |_: ()| {
        if let Some(next) = DetailModel::cancel_delete(&state.get_untracked()) {
            set_state.set(next);
        }
    });

    let delete_model = model.clone();
    let on_confirm_delete = Callback::new(move |_: ()| {
        let Some(next) = DetailModel::begin_delete(&state.get_untracked()) else {
            return;
        };
        set_state.set(next.clone());
        if let DetailState::Deleting { item } = next {
            let model = delete_model.clone();
            spawn_local(async move {
                let after = model.delete(item).await;
                let _ = set_state.try_set(after);
            });
        }
    });

    view! {
        <div class="item-detail-page">
            <a class="back-link" href="/items">"Back to Items"</a>

            {move || match state.get() {
                DetailState::Loading => {
                    view! { <div class="loading">"Loading item..."</div> }.into_any()
                }
                DetailState::NotFound => view! {
                    <div class="not-found">
                        <h1>"Item not found"</h1>
                        <p>"This item does not exist or has been deleted."</p>
                        <a class="button" href="/items">"Browse items"</a>
                    </div>
                }
                .into_any(),
                DetailState::LoadFailed { message } => view! {
                    <div class="error-panel">
                        <p>"Could not load this item: " {message}</p>
                    </div>
                }
                .into_any(),
                DetailState::Viewing { item, error } => view! {
                    <div>
                        {item_card(&item)}
                        {error.map(|message| view! { <p class="action-error">{message}</p> })}
                        <div class="detail-actions">
                            <button class="button" on:click=move |_| on_edit.run(())>
                                "Edit"
                            </button>
                            <button class="button danger" on:click=move |_| on_request_delete.run(())>
                                "Delete"
                            </button>
                        </div>
                    </div>
                }
                .into_any(),
                DetailState::ConfirmingDelete { item } => view! {
                    <div>
                        {item_card(&item)}
                        <div class="delete-confirm">
                            <span>"Delete this item?"</span>
                            <button class="button danger" on:click=move |_| on_confirm_delete.run(())>
                                "Delete"
                            </button>
                            <button class="button outline" on:click=move |_| on_cancel_delete.run(())>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                }
                .into_any(),
                DetailState::Deleting { item } => view! {
                    <div>
                        {item_card(&item)}
                        <p class="pending-note">"Deleting..."</p>
                    </div>
                }
                .into_any(),
                DetailState::Editing { errors, store_error, .. } => view! {
                    <EditForm
                        name=draft_name
                        set_name=set_draft_name
                        description=draft_description
                        set_description=set_draft_description
                        errors=errors
                        store_error=store_error
                        saving=false
                        on_save=on_save
                        on_cancel=on_cancel_edit
                    />
                }
                .into_any(),
                DetailState::Saving { .. } => view! {
                    <EditForm
                        name=draft_name
                        set_name=set_draft_name
                        description=draft_description
                        set_description=set_draft_description
                        errors=FieldErrors::default()
                        store_error=None
                        saving=true
                        on_save=on_save
                        on_cancel=on_cancel_edit
                    />
                }
                .into_any(),
                DetailState::Deleted => view! { <div class="loading">"Deleted."</div> }.into_any(),
            }}
        </div>
    }
}

fn item_card(item: &Item) -> impl IntoView {
    view! {
        <div class="detail-card">
            <h1>{item.name.clone()}</h1>
            <p class="detail-description">{item.description.clone()}</p>
            <p class="item-meta">
                "Added " {item.created_at.format("%b %e, %Y").to_string()}
            </p>
        </div>
    }
}

/// Edit form for the detail page; rendered for both `Editing` and `Saving`
#[component]
fn EditForm(
    name: ReadSignal<String>,
    set_name: WriteSignal<String>,
    description: ReadSignal<String>,
    set_description: WriteSignal<String>,
    errors: FieldErrors,
    store_error: Option<String>,
    saving: bool,
    on_save: Callback<web_sys::SubmitEvent>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name_error = field_error_text("Name", &errors.name);
    let description_error = field_error_text("Description", &errors.description);

    view! {
        <form class="item-form" novalidate=true on:submit=move |ev| on_save.run(ev)>
            <div class="form-field">
                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    disabled=saving
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                {name_error.map(|message| view! { <p class="field-error">{message}</p> })}
            </div>

            <div class="form-field">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="4"
                    disabled=saving
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_description.set(input.value());
                    }
                ></textarea>
                {description_error.map(|message| view! { <p class="field-error">{message}</p> })}
            </div>

            {store_error.map(|message| view! { <p class="action-error">{message}</p> })}

            <div class="detail-actions">
                <button class="button" type="submit" disabled=saving>
                    {if saving { "Saving..." } else { "Save" }}
                </button>
                <button
                    class="button outline"
                    type="button"
                    disabled=saving
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
