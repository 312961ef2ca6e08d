//! Items Listing Page
//!
//! Paginated grid over the `items` table. The current page lives in the URL
//! query so the listing is shareable and restartable from any page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use curio_core::domain::Item;
use curio_core::viewmodel::{ListModel, ListState};

use crate::context::AppContext;

#[component]
pub fn ItemsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let model = ListModel::new(ctx.store());
    let navigate = use_navigate();

    let query = use_query_map();
    let page_param = Memo::new(move |_| {
        query.with(|q| {
            q.get("page")
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(1)
                .max(1)
        })
    });

    let (state, set_state) = signal(ListState::Idle);

    let load_page = Callback::new(move |page: u32| {
        set_state.set(ListState::Loading { page });
        let model = model.clone();
        spawn_local(async move {
            let result = model.load(page).await;
            // Drop responses for pages the user has already left
            let _ = set_state.try_update(|current| {
                if let Some(next) = ListModel::apply(current, result) {
                    *current = next;
                }
            });
        });
    });

    // Fetch on mount and whenever the page in the URL changes
    Effect::new(move |_| {
        load_page.run(page_param.get());
    });

    let request_page = Callback::new(move |target: u32| {
        if let Some(page) = ListModel::page_change(&state.get_untracked(), target) {
            navigate(&format!("/items?page={}", page), NavigateOptions::default());
        }
    });

    view! {
        <div class="items-page">
            <div class="items-header">
                <h1>"Items"</h1>
                <a class="button" href="/items/create">"Add New Item"</a>
            </div>

            {move || match state.get() {
                ListState::Idle | ListState::Loading { .. } => {
                    view! { <div class="loading">"Loading items..."</div> }.into_any()
                }
                ListState::Failed { page, message } => view! {
                    <div class="error-panel">
                        <p>"Could not load items: " {message}</p>
                        <button class="button outline" on:click=move |_| load_page.run(page)>
                            "Try again"
                        </button>
                    </div>
                }
                .into_any(),
                ListState::Loaded { items, page, total_pages } => view! {
                    <div>
                        {if items.is_empty() {
                            empty_state().into_any()
                        } else {
                            item_grid(items).into_any()
                        }}
                        {(total_pages > 1).then(|| pager(page, total_pages, request_page))}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

fn empty_state() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>"No items found"</p>
            <a class="button" href="/items/create">"Create your first item"</a>
        </div>
    }
}

fn item_grid(items: Vec<Item>) -> impl IntoView {
    view! {
        <div class="item-grid">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <a class="item-card" href=format!("/items/{}", item.id)>
                            <h2>{item.name.clone()}</h2>
                            <p class="item-blurb">{item.description.clone()}</p>
                            <p class="item-meta">
                                "Added " {item.created_at.format("%b %e, %Y").to_string()}
                            </p>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn pager(page: u32, total_pages: u32, request_page: Callback<u32>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="button outline"
                disabled={page <= 1}
                on:click=move |_| request_page.run(page - 1)
            >
                "Previous"
            </button>
            {(1..=total_pages)
                .map(|n| {
                    view! {
                        <button
                            class={if n == page { "page-btn active" } else { "page-btn" }}
                            on:click=move |_| request_page.run(n)
                        >
                            {n}
                        </button>
                    }
                })
                .collect_view()}
            <button
                class="button outline"
                disabled={page >= total_pages}
                on:click=move |_| request_page.run(page + 1)
            >
                "Next"
            </button>
        </div>
    }
}
