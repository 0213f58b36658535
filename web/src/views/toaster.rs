use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use ui::{Notice, NoticeKind, Notices};

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn Toaster(notices: Notices, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toaster",
            for notice in notices.iter().cloned() {
                {
                    let id = notice.id;
                    rsx! {
                        Toast { key: "{id}", notice, on_dismiss }
                    }
                }
            }
        }
    }
}

#[component]
fn Toast(notice: Notice, on_dismiss: EventHandler<u64>) -> Element {
    let id = notice.id;

    // The timer belongs to this toast and stops if it is closed by hand
    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            on_dismiss.call(id);
        })
    });

    let class = match notice.kind {
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Error => "toast toast-error",
    };

    rsx! {
        div { class, role: "status",
            span { class: "toast-message", "{notice.message}" }
            button {
                class: "toast-close",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}
