//! Chat page: conversation history with the assistant.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{ChatMessage, ChatRequest};
use crate::routes;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::session::Session;

/// Chat page showing the message history and an input row.
///
/// Reaching this view at all is the guard's decision; the page itself holds
/// no authorization logic. Logging out clears the session and returns to the
/// login form.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let navigate = use_navigate();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || chat.get().pending {
            return;
        }

        chat.update(|c| {
            c.messages.push(ChatMessage {
                role: "user".to_owned(),
                content: text.trim().to_owned(),
                time: None,
            });
            c.pending = true;
        });
        input.set(String::new());

        leptos::task::spawn_local(async move {
            let request = ChatRequest {
                messages: chat.get_untracked().messages.clone(),
            };
            match api::send_chat(&request).await {
                Ok(reply) => chat.update(|c| {
                    c.messages.push(ChatMessage {
                        role: reply.role,
                        content: reply.content,
                        time: reply.time,
                    });
                    c.pending = false;
                }),
                Err(e) => {
                    leptos::logging::warn!("chat request failed: {e}");
                    chat.update(|c| c.pending = false);
                }
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_logout = move |_| {
        session.set_authenticated(false);
        auth.update(|a| a.user = None);
        navigate(routes::LOGIN.path, NavigateOptions::default());
    };

    let username = move || {
        auth.get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending;

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"Parlor"</h1>
                <div class="chat-page__user">
                    <span class="chat-page__username">{username}</span>
                    <button class="btn chat-page__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </header>

            <div class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-page__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let class = if msg.role == "user" {
                                "chat-page__message chat-page__message--user"
                            } else {
                                "chat-page__message chat-page__message--assistant"
                            };
                            let content = msg.content.clone();
                            view! {
                                <div class=class>
                                    <span class="chat-page__text">{content}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || chat.get().pending>
                <div class="chat-page__pending">"Waiting for a reply..."</div>
            </Show>

            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Say something..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-page__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
