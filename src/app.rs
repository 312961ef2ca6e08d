//! Curio Frontend App
//!
//! Root component: builds the store client, provides context, and wires up
//! routing and layout chrome.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use curio_core::store::{RestStore, StoreConfig};

use crate::components::{
    CreateItemPage, Footer, Header, HomePage, ItemDetailPage, ItemsPage, NoticeHost,
};
use crate::context::{AppContext, Notice};

/// REST root of the hosted store; overridable at build time
const STORE_URL: &str = match option_env!("CURIO_STORE_URL") {
    Some(url) => url,
    None => "http://localhost:54321/rest/v1",
};

/// API key sent with every request, when the deployment needs one
const STORE_API_KEY: Option<&str> = option_env!("CURIO_STORE_KEY");

#[component]
pub fn App() -> impl IntoView {
    // One store client per process, shared through context
    let store = Rc::new(RestStore::new(StoreConfig {
        base_url: STORE_URL.to_string(),
        api_key: STORE_API_KEY.map(str::to_string),
    }));
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    provide_context(AppContext::new(store, (notice, set_notice)));

    view! {
        <Router>
            <div class="page-shell">
                <Header/>
                <main class="page-main">
                    <Routes fallback=|| view! { <p class="route-missing">"Page not found."</p> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/items") view=ItemsPage/>
                        <Route path=path!("/items/create") view=CreateItemPage/>
                        <Route path=path!("/items/:id") view=ItemDetailPage/>
                    </Routes>
                </main>
                <Footer/>
                <NoticeHost/>
            </div>
        </Router>
    }
}
