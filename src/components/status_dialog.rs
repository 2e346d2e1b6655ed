//! Status Dialog Component
//!
//! Modal that reports the outcome of load, save, and restore. Errors stay
//! until dismissed; success notices close on their own.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_dismiss, use_admin_store, AdminStateStoreFields, NoticeKind};

const SUCCESS_DISMISS_MS: u32 = 2500;

#[component]
pub fn StatusDialog() -> impl IntoView {
    let store = use_admin_store();

    // Auto-close success notices unless a newer notice replaced them
    Effect::new(move |_| {
        if let Some(notice) = store.notice().get() {
            if notice.kind == NoticeKind::Success {
                spawn_local(async move {
                    TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
                    if store.notice().get_untracked().as_ref() == Some(&notice) {
                        store_dismiss(&store);
                    }
                });
            }
        }
    });

    view! {
        {move || store.notice().get().map(|notice| {
            let dialog_class = match notice.kind {
                NoticeKind::Success => "modal success",
                NoticeKind::Error => "modal error",
            };
            view! {
                <div class="modal-backdrop">
                    <div class=dialog_class role="alertdialog">
                        <h2 class="modal-title">{notice.title}</h2>
                        <p class="modal-message">{notice.message}</p>
                        <button class="btn primary" on:click=move |_| store_dismiss(&store)>
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
