//! Notice tray: renders the shared `NoticeQueue` and runs notice actions.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeAction, NoticeQueue, NoticeVariant};
use crate::state::session::{BrowserTokenStore, Session};

/// Show `notice`, scheduling its removal when it has a timeout.
pub fn notify(notices: RwSignal<NoticeQueue>, notice: Notice) {
    let auto_dismiss_ms = notice.auto_dismiss_ms;
    let Some(id) = notices.try_update(|q| q.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        if let Some(ms) = auto_dismiss_ms {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(ms).await;
                notices.update(|q| {
                    q.dismiss(id);
                });
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auto_dismiss_ms, id);
    }
}

fn variant_class(variant: NoticeVariant) -> &'static str {
    match variant {
        NoticeVariant::Default => "notice",
        NoticeVariant::Success => "notice notice--success",
        NoticeVariant::Destructive => "notice notice--destructive",
    }
}

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let session = expect_context::<RwSignal<Session>>();

    let dismiss = move |id: u64| {
        notices.update(|q| {
            q.dismiss(id);
        });
    };

    // Both buttons of an action notice settle it; only the action button accepts.
    let settle = move |id: u64, action: Option<NoticeAction>, accepted: bool| {
        if let Some(action) = action {
            session.update(|s| {
                action.resolve(accepted, s, &BrowserTokenStore);
            });
        }
        dismiss(id);
    };

    view! {
        <ol class="notice-tray" aria-live="polite">
            <For
                each=move || notices.with(|q| q.notices().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let action = n.action;
                    view! {
                        <li class=variant_class(n.variant) role="status">
                            <div class="notice__body">
                                <p class="notice__title">{n.title}</p>
                                <p class="notice__description">{n.description}</p>
                            </div>
                            {action.map(|a| {
                                view! {
                                    <button class="notice__action" on:click=move |_| settle(id, Some(a), true)>
                                        {a.label()}
                                    </button>
                                }
                            })}
                            <button class="notice__close" title="Dismiss" on:click=move |_| settle(id, action, false)>
                                "\u{00D7}"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
