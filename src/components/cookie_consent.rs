use gloo_timers::callback::Timeout;
use log::error;
use yew::prelude::*;

use crate::config::CONSENT_BANNER_DELAY_MS;
use crate::consent::{ConsentError, ConsentGate, LocalConsentStore};
use crate::navigation::{nav_link, use_navigate, NavRequest, Page};

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let navigate = use_navigate();
    let gate = use_mut_ref(|| ConsentGate::mount(LocalConsentStore));
    let redraw = use_force_update();

    // The pending reveal is dropped (and so cancelled) if we unmount first.
    {
        let gate = gate.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |_| {
                let needs_reveal = gate.borrow().needs_reveal();
                let timeout = needs_reveal.then(|| {
                    Timeout::new(CONSENT_BANNER_DELAY_MS, move || {
                        gate.borrow_mut().reveal();
                        redraw.force_update();
                    })
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let decide = |choose: fn(&mut ConsentGate<LocalConsentStore>) -> Result<(), ConsentError>| {
        let gate = gate.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = choose(&mut gate.borrow_mut()) {
                error!("Failed to store cookie consent: {}", e);
            }
            redraw.force_update();
        })
    };
    let accept = decide(ConsentGate::accept);
    let decline = decide(ConsentGate::decline);

    let dismiss = {
        let gate = gate.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            gate.borrow_mut().dismiss();
            redraw.force_update();
        })
    };

    if !gate.borrow().is_visible() {
        return html! {};
    }

    html! {
        <div class="cookie-banner">
            <button class="cookie-close" onclick={dismiss}>{"×"}</button>
            <h4>{"We value your privacy"}</h4>
            <p>
                {"We use cookies to enhance your browsing experience, analyse site traffic and support our impact reporting. Read our "}
                <a href="#" onclick={nav_link(&navigate, NavRequest::to(Page::CookiePolicy))}>{"Cookie Policy"}</a>
                {" to learn more."}
            </p>
            <div class="cookie-actions">
                <button class="cookie-decline" onclick={decline}>{"Decline"}</button>
                <button class="cookie-accept" onclick={accept}>{"Accept All"}</button>
            </div>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    z-index: 1000;
                    max-width: 420px;
                    background: #062c20;
                    color: #fff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    animation: cookie-slide-up 0.5s ease-out;
                }
                @keyframes cookie-slide-up {
                    from { transform: translateY(100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .cookie-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .cookie-banner p {
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.7);
                    line-height: 1.6;
                }
                .cookie-banner a {
                    color: #a3d65c;
                }
                .cookie-actions {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .cookie-actions button {
                    flex: 1;
                    padding: 0.75rem;
                    border-radius: 999px;
                    font-weight: 700;
                    cursor: pointer;
                }
                .cookie-decline {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                }
                .cookie-accept {
                    background: #a3d65c;
                    border: none;
                    color: #062c20;
                }
                "#}
            </style>
        </div>
    }
}
