//! Marketing Home Page
//!
//! Hero, feature cards, and a call-to-action, all pointing at the items
//! listing.

use leptos::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "⚡",
        "Lightning Fast",
        "Compiled to WebAssembly with fine-grained reactivity, so pages load \
         quickly and stay responsive.",
    ),
    (
        "🧩",
        "Typed End to End",
        "One set of types from the form field to the table row; invalid input \
         never leaves the browser.",
    ),
    (
        "🔒",
        "Secure by Default",
        "The hosted store enforces access rules server-side and records \
         ownership when a signed-in user writes.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Catalog Anything"</h1>
                <p class="hero-copy">
                    "Curio is a small, fast home for the things you want to keep track \
                     of: name them, describe them, find them again."
                </p>
                <div class="hero-actions">
                    <a class="button" href="/items">"Get Started"</a>
                    <a
                        class="button outline"
                        href="https://github.com"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View on GitHub"
                    </a>
                </div>
            </section>

            <section class="features">
                <h2>"Why Curio?"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, copy)| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*copy}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Get Started?"</h2>
                <p>"Add your first item in under a minute."</p>
                <a class="button" href="/items">"Start Building"</a>
            </section>
        </div>
    }
}
