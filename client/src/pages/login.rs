//! Login page: email + password against `POST /login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the shared session enters `LoggedIn` (token persisted) and the
//! router goes home; the header re-renders from the session. Every failure
//! shows one generic notice and clears the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::notice_tray::notify;
use crate::net::api::{ApiClient, ApiTransport, AuthError};
use crate::net::types::LoginRequest;
use crate::state::notice::{Notice, NoticeQueue};
use crate::state::session::{BrowserTokenStore, Session, TokenStore};

pub const LOGIN_FAILED_TITLE: &str = "Oops! Login failed.";
pub const LOGIN_FAILED_DESCRIPTION: &str = "Please check your email and password.";
pub const AFTER_LOGIN_ROUTE: &str = "/";

/// Controlled state of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub user_email: String,
    pub user_password: String,
    pub loading: bool,
}

/// What the page should do once a submit resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirect(&'static str),
    Notify(Notice),
}

impl LoginForm {
    /// Mark the form busy and snapshot the credentials.
    ///
    /// Returns `None` while a previous submit is still in flight.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(LoginRequest { user_email: self.user_email.clone(), user_password: self.user_password.clone() })
    }

    /// Apply the result of [`attempt_login`] to the form and the session.
    pub fn finish(
        &mut self,
        result: Result<String, AuthError>,
        session: &mut Session,
        store: &impl TokenStore,
    ) -> LoginOutcome {
        self.loading = false;
        match result {
            Ok(token) => {
                session.log_in(token, store);
                LoginOutcome::Redirect(AFTER_LOGIN_ROUTE)
            }
            Err(e) => {
                log::warn!("login failed: {e:?}");
                self.user_email.clear();
                self.user_password.clear();
                LoginOutcome::Notify(Notice::destructive(LOGIN_FAILED_TITLE, LOGIN_FAILED_DESCRIPTION))
            }
        }
    }
}

/// Exchange credentials for an access token.
///
/// # Errors
///
/// Whatever [`ApiClient::login`] reports; the page does not tell them apart.
pub async fn attempt_login<T: ApiTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    request: &LoginRequest,
) -> Result<String, AuthError> {
    api.login(request).await
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = attempt_login(&ApiClient::browser(), &request).await;
            let outcome = session.try_update(|s| form.try_update(|f| f.finish(result, s, &BrowserTokenStore)));
            match outcome.flatten() {
                Some(LoginOutcome::Redirect(route)) => navigate(route, NavigateOptions::default()),
                Some(LoginOutcome::Notify(notice)) => notify(notices, notice),
                None => {}
            }
        });
    };

    let loading = move || form.with(|f| f.loading);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__intro">
                    <span class="auth-card__icon" aria-hidden="true">"\u{1F4C5}"</span>
                    <h1>"Welcome Back!"</h1>
                    <p class="auth-card__subtitle">"Sign in to access your digital planner"</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        name="userEmail"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.user_email.clone())
                        on:input=move |ev| form.update(|f| f.user_email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        name="userPassword"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.user_password.clone())
                        on:input=move |ev| form.update(|f| f.user_password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=loading>
                        {move || if loading() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/signUp">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
