//! Notice Host
//!
//! Renders the current app-wide notice and clears it after a fixed display
//! time, unless a newer notice has replaced it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, NoticeKind};

/// How long a notice stays on screen
const NOTICE_DISMISS_MS: u32 = 4000;

#[component]
pub fn NoticeHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notice = ctx.notice;

    let dismiss_ctx = ctx.clone();
    Effect::new(move |_| {
        let Some(current) = notice.get() else { return };
        let ctx = dismiss_ctx.clone();
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            // Only clear if this notice is still the one on screen
            if notice.try_get_untracked().flatten().as_ref() == Some(&current) {
                ctx.dismiss_notice();
            }
        });
    });

    let close_ctx = ctx.clone();
    view! {
        <div class="notice-host">
            {move || {
                notice
                    .get()
                    .map(|n| {
                        let ctx = close_ctx.clone();
                        let kind_class = match n.kind {
                            NoticeKind::Success => "notice success",
                            NoticeKind::Error => "notice error",
                        };
                        view! {
                            <div class=kind_class role="status">
                                <p class="notice-title">{n.title.clone()}</p>
                                <p class="notice-detail">{n.detail.clone()}</p>
                                <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
