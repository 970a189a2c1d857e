//! Login page: credential form with sign-in and create-account modes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::routes;
use crate::state::auth::AuthState;
use crate::state::session::Session;

/// Which form the page currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

/// Login page. Submits credentials and opens the session on success.
///
/// Failed sign-ins surface the server's message inline and leave the session
/// untouched. Only one login request may be in flight at a time; submits
/// while `loading` are ignored. Registration failures come back as either a
/// resolved body or a raised [`crate::net::types::ApiError`], and both are
/// shown inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::SignIn);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let submit = Callback::new(move |_: ()| {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_owned()));
            return;
        }
        if auth.get().loading {
            // A login request is already in flight.
            return;
        }
        error.set(None);
        notice.set(None);

        match mode.get() {
            Mode::SignIn => {
                let session = session.clone();
                let navigate = navigate.clone();
                auth.update(|a| a.loading = true);
                leptos::task::spawn_local(async move {
                    let credentials = LoginRequest {
                        username: user,
                        password: pass,
                    };
                    let response = api::login(&credentials).await;
                    auth.update(|a| a.loading = false);
                    if response.success {
                        session.set_authenticated(true);
                        auth.update(|a| a.user = response.user);
                        navigate(routes::CHAT.path, NavigateOptions::default());
                    } else {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Login failed".to_owned());
                        error.set(Some(message));
                    }
                });
            }
            Mode::Register => {
                let address = email.get();
                if address.trim().is_empty() {
                    error.set(Some("Email is required".to_owned()));
                    return;
                }
                leptos::task::spawn_local(async move {
                    let request = RegisterRequest {
                        username: user,
                        password: pass,
                        email: address,
                    };
                    match api::register(&request).await {
                        Ok(body) if body.success => {
                            notice.set(Some("Account created, you can sign in now".to_owned()));
                            mode.set(Mode::SignIn);
                            password.set(String::new());
                        }
                        Ok(body) => {
                            let message = body
                                .message
                                .unwrap_or_else(|| "Registration failed".to_owned());
                            error.set(Some(message));
                        }
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            }
        }
    });

    let toggle_mode = move |_| {
        error.set(None);
        notice.set(None);
        mode.update(|m| {
            *m = match *m {
                Mode::SignIn => Mode::Register,
                Mode::Register => Mode::SignIn,
            };
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Parlor"</h1>
                <p class="login-page__tagline">"Sign in to start chatting"</p>

                <label class="login-page__label">
                    "Username"
                    <input
                        class="login-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || mode.get() == Mode::Register>
                    <label class="login-page__label">
                        "Email"
                        <input
                            class="login-page__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="login-page__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>

                <button
                    class="btn btn--primary login-page__submit"
                    disabled=move || auth.get().loading
                    on:click=move |_| submit.run(())
                >
                    {move || match (mode.get(), auth.get().loading) {
                        (Mode::SignIn, true) => "Signing in...",
                        (Mode::SignIn, false) => "Sign in",
                        (Mode::Register, _) => "Create account",
                    }}
                </button>

                <button class="login-page__toggle" on:click=toggle_mode>
                    {move || match mode.get() {
                        Mode::SignIn => "Need an account? Create one",
                        Mode::Register => "Have an account? Sign in",
                    }}
                </button>
            </div>
        </div>
    }
}
