use yew::prelude::*;

use crate::config;
use crate::content::{anchors, NAV_LINKS};
use crate::interactions::nav::{NavEvent, NavState};
use crate::interactions::nav_scope::NavScope;

#[function_component(Topbar)]
fn topbar() -> Html {
    html! {
        <div class="topbar">
            <div class="container">
                <div>{"სწრაფი მომსახურება თბილისში"}</div>
                <div>
                    <a class="pill" href={config::tel_href()}>
                        {format!("დაგვირეკეთ: {}", config::PHONE_DISPLAY)}
                    </a>
                </div>
            </div>
        </div>
    }
}

fn logo() -> Html {
    html! {
        <a href={format!("#{}", anchors::HOME)} class="logo" aria-label="DrWash მთავარი">
            <svg width="40" height="40" viewBox="0 0 40 40" aria-hidden="true" focusable="false">
                <circle cx="20" cy="20" r="20" fill={config::THEME_COLOR} />
                <text
                    x="50%"
                    y="50%"
                    dominant-baseline="middle"
                    text-anchor="middle"
                    font-size="20"
                    font-family="system-ui, -apple-system, Segoe UI, Roboto, Noto Sans, sans-serif"
                    fill="#fff"
                >
                    {"D"}
                </text>
            </svg>
            <span>{config::SITE_NAME}</span>
        </a>
    }
}

/// Topbar plus the header with the collapsible navigation panel.
///
/// While the panel is open the body scroll is locked. The Escape listener
/// and the lock share one effect scope, so both are released together when
/// the state changes or the header unmounts.
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let nav = use_state(NavState::default);

    {
        let current = *nav;
        let nav = nav.clone();
        use_effect_with_deps(
            move |state: &NavState| {
                let state = *state;
                let scope = web_sys::window().map(|window| {
                    let body = window.document().and_then(|document| document.body());
                    NavScope::enter(window, body, state, move |event| nav.set(state.apply(event)))
                });
                move || drop(scope)
            },
            current,
        );
    }

    let toggle_nav = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.set(nav.toggle()))
    };

    let close_on_backdrop = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.set(nav.apply(NavEvent::BackdropClick)))
    };

    // No prevent_default: the anchor still has to scroll to its section.
    let close_on_link = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.set(nav.apply(NavEvent::LinkClick)))
    };

    html! {
        <>
            <Topbar />
            <header>
                <div class="container header-row">
                    { logo() }

                    <button
                        id="nav-toggle"
                        class="nav-toggle"
                        aria-label="მენიუს გახსნა"
                        aria-controls="primary-nav"
                        aria-expanded={nav.aria_expanded()}
                        onclick={toggle_nav}
                    >
                        <svg viewBox="0 0 24 24" aria-hidden="true">
                            <path
                                d="M3 6h18M3 12h18M3 18h18"
                                stroke={config::THEME_COLOR}
                                stroke-width="2"
                                stroke-linecap="round"
                            />
                        </svg>
                    </button>

                    <nav aria-label="მთავარი ნავიგაცია">
                        <div id="primary-nav" class={nav.panel_class()}>
                            <ul class="nav">
                                { for NAV_LINKS.iter().map(|link| html! {
                                    <li>
                                        <a
                                            class={classes!("nav-link", link.cta.then_some("nav-cta"))}
                                            href={format!("#{}", link.anchor)}
                                            onclick={close_on_link.clone()}
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </nav>

                    <div
                        id="nav-backdrop"
                        class={nav.backdrop_class()}
                        hidden={!nav.is_open()}
                        onclick={close_on_backdrop}
                    />
                </div>
            </header>
        </>
    }
}
