//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::notice_tray::NoticeTray;
use crate::net::api::ApiClient;
use crate::pages::{home::HomePage, login::LoginPage, sign_up::SignUpPage};
use crate::state::notice::NoticeQueue;
use crate::state::session::{BrowserTokenStore, Session};
use crate::state::shop::ShopState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session, notice queue and shop state and provides them to every
/// page and component below it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // SSR has no localStorage, so the session starts logged out and is
    // restored once the browser takes over.
    let session = RwSignal::new(Session::default());
    let notices = RwSignal::new(NoticeQueue::default());
    let shop = RwSignal::new(ShopState::default());

    provide_context(session);
    provide_context(notices);
    provide_context(shop);

    Effect::new(move || {
        session.set(Session::restore(&BrowserTokenStore));
    });

    // Header badges follow the logged-in user's wish list and cart.
    Effect::new(move || {
        if !session.with(Session::is_logged_in) {
            shop.set(ShopState::default());
            return;
        }
        leptos::task::spawn_local(async move {
            match ApiClient::browser().fetch_user_data().await {
                Ok(data) => shop.set(ShopState::from(data)),
                Err(e) => log::warn!("user data unavailable: {e:?}"),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="That Girl Planner"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signUp") view=SignUpPage/>
                </Routes>
            </main>
            <NoticeTray/>
        </Router>
    }
}
