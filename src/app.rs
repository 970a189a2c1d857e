//! Root application component with routing, guard wiring, and context
//! providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::guard::{self, GuardDecision};
use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::routes;
use crate::state::{auth::AuthState, chat::ChatState, session::Session};

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
/// Provides the session and shared state contexts, then sets up client-side
/// routing with every route wrapped in [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(session);
    provide_context(auth);
    provide_context(chat);

    view! {
        <Stylesheet id="leptos" href="/pkg/parlor.css"/>
        <Title text="Parlor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <Guarded route=routes::LOGIN>
                                <LoginPage/>
                            </Guarded>
                        }
                    }
                />

                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <Guarded route=routes::CHAT>
                                <ChatPage/>
                            </Guarded>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Wraps a routed view and runs the navigation guard before it renders.
///
/// The decision is made synchronously from local session state, so a denied
/// transition swaps in the redirect during the same render pass; the guarded
/// view never appears.
#[component]
fn Guarded(route: routes::RouteDescriptor, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    move || match guard::decide(&route, &session) {
        GuardDecision::Allow => children(),
        GuardDecision::Redirect(target) => view! { <Redirect path=target.path/> }.into_any(),
    }
}
