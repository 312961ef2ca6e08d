//! Site Footer
//!
//! Brand blurb plus link columns.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3>"Curio"</h3>
                        <p>"A small catalog app built with Leptos and a hosted Postgres table."</p>
                    </div>

                    <div>
                        <h4>"Quick Links"</h4>
                        <ul>
                            <li><a href="/">"Home"</a></li>
                            <li><a href="/items">"Items"</a></li>
                            <li><a href="/items/create">"Add an Item"</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4>"Resources"</h4>
                        <ul>
                            <li>
                                <a href="https://leptos.dev" target="_blank" rel="noopener noreferrer">
                                    "Leptos"
                                </a>
                            </li>
                            <li>
                                <a href="https://postgrest.org" target="_blank" rel="noopener noreferrer">
                                    "PostgREST"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <p class="footer-note">"© Curio. All rights reserved."</p>
            </div>
        </footer>
    }
}
