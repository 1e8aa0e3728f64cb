//! Site footer shown at the bottom of the home page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::SITE_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__brand">{SITE_NAME}</p>
            <nav class="site-footer__links">
                <A href="/shop">"Shop"</A>
                <A href="/login">"Log In"</A>
                <A href="/signUp">"Sign Up"</A>
            </nav>
            <p class="site-footer__note">"Digital planners for every season of life."</p>
        </footer>
    }
}
