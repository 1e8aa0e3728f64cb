//! Site header: brand link plus session-dependent navigation.
//!
//! DESIGN
//! ======
//! What the nav shows is derived into [`NavState`] and rendered with an
//! exhaustive `match`, so a new session state cannot be forgotten here.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice_tray::notify;
use crate::state::notice::{Notice, NoticeQueue};
use crate::state::session::Session;
use crate::state::shop::ShopState;

pub const SITE_NAME: &str = "That Girl Planner";

/// Navigation affordances for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    LoggedOut,
    LoggedIn { wish_count: usize, cart_count: usize },
}

impl NavState {
    #[must_use]
    pub fn new(session: &Session, shop: &ShopState) -> Self {
        match session {
            Session::LoggedOut => Self::LoggedOut,
            Session::LoggedIn { .. } => Self::LoggedIn { wish_count: shop.wish_count(), cart_count: shop.cart_count() },
        }
    }
}

/// One icon link in the logged-in nav.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Count bubble; `None` hides it.
    pub badge: Option<usize>,
}

fn badge(count: usize) -> Option<usize> {
    (count > 0).then_some(count)
}

/// Shop, wish list, cart and orders links, with non-zero badges.
#[must_use]
pub fn member_links(wish_count: usize, cart_count: usize) -> [NavLink; 4] {
    [
        NavLink { href: "/shop", label: "Shop", icon: "\u{1F3EC}", badge: None },
        NavLink { href: "/wishlist", label: "Wish list", icon: "\u{2665}", badge: badge(wish_count) },
        NavLink { href: "/cards", label: "Cart", icon: "\u{1F6D2}", badge: badge(cart_count) },
        NavLink { href: "/order", label: "Orders", icon: "\u{1F6CD}", badge: None },
    ]
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let shop = expect_context::<RwSignal<ShopState>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();

    let nav = move || session.with(|s| shop.with(|sh| NavState::new(s, sh)));

    // Logging out only asks; the notice tray performs it on "Yes".
    let on_logout = move |_| notify(notices, Notice::confirm_logout());

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                <img src="/assets/logo.png" alt="Digital Planner Logo" class="site-header__logo"/>
                <h1 class="site-header__name">{SITE_NAME}</h1>
            </A>
            <nav class="site-header__nav">
                {move || match nav() {
                    NavState::LoggedIn { wish_count, cart_count } => view! {
                        {member_links(wish_count, cart_count)
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <A href=link.href attr:class="site-header__link" attr:title=link.label>
                                        <span aria-hidden="true">{link.icon}</span>
                                        {link.badge.map(|count| view! { <span class="site-header__badge">{count}</span> })}
                                    </A>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <button class="btn btn--primary" on:click=on_logout>"Logout"</button>
                    }
                        .into_any(),
                    NavState::LoggedOut => view! {
                        <A href="/login" attr:class="site-header__link" attr:title="Log in">
                            <span aria-hidden="true">"\u{1F464}"</span>
                        </A>
                        <A href="/signUp" attr:class="btn btn--primary">"Sign Up"</A>
                    }
                        .into_any(),
                }}
            </nav>
        </header>
    }
}
