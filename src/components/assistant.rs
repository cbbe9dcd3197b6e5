use log::{debug, info};
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::api::{self, AssistantError};
use crate::chat::{ChatMessage, ChatSession, Feedback, Role, SUGGESTIONS};

pub enum AssistantMsg {
    Toggle,
    SetInput(String),
    Send,
    Reply(Result<String, AssistantError>),
    Rate(usize, Feedback),
    UseSuggestion(&'static str),
}

/// Floating "Sustainability Expert" chat. At most one question is in flight.
pub struct AssistantWidget {
    expanded: bool,
    input: String,
    session: ChatSession,
    transcript_ref: NodeRef,
}

impl Component for AssistantWidget {
    type Message = AssistantMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            expanded: false,
            input: String::new(),
            session: ChatSession::new(),
            transcript_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AssistantMsg::Toggle => {
                self.expanded = !self.expanded;
                true
            }
            AssistantMsg::SetInput(input) => {
                self.input = input;
                true
            }
            AssistantMsg::UseSuggestion(text) => {
                self.input = text.to_string();
                true
            }
            AssistantMsg::Send => {
                let question = match self.session.submit(&self.input) {
                    Ok(question) => question,
                    Err(e) => {
                        debug!("Send ignored: {}", e);
                        return false;
                    }
                };
                info!("Asking assistant");
                self.input.clear();
                ctx.link().send_future(async move {
                    AssistantMsg::Reply(api::ask_assistant(&question).await)
                });
                true
            }
            AssistantMsg::Reply(outcome) => self.session.complete(outcome),
            AssistantMsg::Rate(index, feedback) => match self.session.rate(index, feedback) {
                Ok(()) => true,
                Err(e) => {
                    debug!("Feedback ignored: {}", e);
                    false
                }
            },
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(transcript) = self.transcript_ref.cast::<Element>() {
            transcript.set_scroll_top(transcript.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| AssistantMsg::Toggle);
        let pending = self.session.is_pending();

        html! {
            <div class={classes!("assistant-widget", self.expanded.then(|| "expanded"))}>
                if self.expanded {
                    <div class="assistant-panel">
                        <div class="assistant-header">
                            <div>
                                <h3>{"Sustainability Expert"}</h3>
                                <span class="assistant-status">{"AgAsset AI • Online"}</span>
                            </div>
                            <button class="assistant-close" onclick={toggle.clone()}>{"✕"}</button>
                        </div>

                        <div class="assistant-transcript" ref={self.transcript_ref.clone()}>
                            { for self.session.messages().iter().enumerate().map(|(index, message)| self.render_message(ctx, index, message)) }
                            if pending {
                                <div class="chat-message assistant loading">
                                    <span class="dot"></span>
                                    <span class="dot"></span>
                                    <span class="dot"></span>
                                </div>
                            }
                        </div>

                        if self.session.show_suggestions() {
                            <div class="assistant-suggestions">
                                {
                                    SUGGESTIONS.into_iter().map(|text| {
                                        html! {
                                            <button key={text} onclick={ctx.link().callback(move |_| AssistantMsg::UseSuggestion(text))}>
                                                {text}
                                            </button>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }

                        <div class="assistant-input">
                            <input
                                type="text"
                                placeholder="Ask about PUE financing..."
                                value={self.input.clone()}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    AssistantMsg::SetInput(input.value())
                                })}
                                onkeypress={ctx.link().batch_callback(|e: KeyboardEvent| {
                                    (e.key() == "Enter").then(|| AssistantMsg::Send)
                                })}
                            />
                            <button
                                onclick={ctx.link().callback(|_| AssistantMsg::Send)}
                                disabled={pending || self.input.trim().is_empty()}
                            >
                                {"➤"}
                            </button>
                        </div>
                    </div>
                } else {
                    <button class="assistant-toggle" onclick={toggle}>{"💬"}</button>
                }
                <style>
                    {r#"
                    .assistant-widget {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 1001;
                    }
                    .assistant-toggle {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        border: none;
                        background: #062c20;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);
                    }
                    .assistant-panel {
                        width: 380px;
                        height: 560px;
                        display: flex;
                        flex-direction: column;
                        background: #fff;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.25);
                    }
                    .assistant-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 1.5rem;
                        background: #062c20;
                        color: #fff;
                    }
                    .assistant-header h3 {
                        margin: 0;
                        font-size: 1rem;
                    }
                    .assistant-status {
                        font-size: 0.7rem;
                        color: #a3d65c;
                    }
                    .assistant-close {
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .assistant-transcript {
                        flex: 1;
                        overflow-y: auto;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        background: #f9fafb;
                    }
                    .chat-message {
                        max-width: 85%;
                        padding: 0.75rem 1rem;
                        border-radius: 1rem;
                        font-size: 0.9rem;
                        line-height: 1.5;
                    }
                    .chat-message.user {
                        align-self: flex-end;
                        background: #062c20;
                        color: #fff;
                    }
                    .chat-message.assistant {
                        align-self: flex-start;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        color: #062c20;
                    }
                    .chat-meta {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-top: 0.5rem;
                        font-size: 0.7rem;
                        color: #9ca3af;
                    }
                    .chat-meta button {
                        background: none;
                        border: none;
                        cursor: pointer;
                        opacity: 0.5;
                    }
                    .chat-meta button.selected {
                        opacity: 1;
                    }
                    .loading .dot {
                        display: inline-block;
                        width: 6px;
                        height: 6px;
                        margin-right: 4px;
                        border-radius: 50%;
                        background: #a3d65c;
                        animation: assistant-bounce 1s infinite;
                    }
                    @keyframes assistant-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-4px); }
                    }
                    .assistant-suggestions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        padding: 0 1.5rem 1rem;
                        background: #f9fafb;
                    }
                    .assistant-suggestions button {
                        border: 1px solid #e5e7eb;
                        background: #fff;
                        border-radius: 999px;
                        padding: 0.4rem 0.8rem;
                        font-size: 0.75rem;
                        cursor: pointer;
                    }
                    .assistant-input {
                        display: flex;
                        gap: 0.5rem;
                        padding: 1rem;
                        border-top: 1px solid #e5e7eb;
                    }
                    .assistant-input input {
                        flex: 1;
                        border: 1px solid #e5e7eb;
                        border-radius: 999px;
                        padding: 0.6rem 1rem;
                    }
                    .assistant-input button {
                        border: none;
                        border-radius: 50%;
                        width: 2.5rem;
                        background: #a3d65c;
                        cursor: pointer;
                    }
                    .assistant-input button:disabled {
                        opacity: 0.4;
                        cursor: not-allowed;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

impl AssistantWidget {
    fn render_message(&self, ctx: &Context<Self>, index: usize, message: &ChatMessage) -> Html {
        let is_assistant = message.role == Role::Assistant;
        let rate_button = |feedback: Feedback, icon: &'static str| {
            html! {
                <button
                    class={classes!((message.feedback == Some(feedback)).then(|| "selected"))}
                    title={feedback.as_str()}
                    onclick={ctx.link().callback(move |_| AssistantMsg::Rate(index, feedback))}
                >
                    {icon}
                </button>
            }
        };

        html! {
            <div key={index} class={classes!("chat-message", if is_assistant { "assistant" } else { "user" })}>
                <p>{&message.text}</p>
                <div class="chat-meta">
                    <span>{message.time_label()}</span>
                    if is_assistant {
                        { rate_button(Feedback::Positive, "👍") }
                        { rate_button(Feedback::Negative, "👎") }
                    }
                </div>
            </div>
        }
    }
}
