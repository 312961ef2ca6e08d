//! Site Header
//!
//! Brand link and primary navigation, with a collapsible menu on small
//! screens. The router handles every in-app anchor click.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <div class="container">
                <div class="header-row">
                    <a class="brand" href="/">"Curio"</a>

                    <nav class="nav-desktop">
                        <a class="nav-link" href="/">"Home"</a>
                        <a class="nav-link" href="/items">"Items"</a>
                        <a class="nav-cta" href="/items/create">"Get Started"</a>
                    </nav>

                    <button
                        class="menu-toggle"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <nav class="nav-mobile">
                        <a class="nav-link" href="/" on:click=move |_| set_menu_open.set(false)>
                            "Home"
                        </a>
                        <a class="nav-link" href="/items" on:click=move |_| set_menu_open.set(false)>
                            "Items"
                        </a>
                        <a
                            class="nav-cta"
                            href="/items/create"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Get Started"
                        </a>
                    </nav>
                </Show>
            </div>
        </header>
    }
}
