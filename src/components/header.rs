use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::data::company::COMPANY;
use crate::data::content::NAV_ITEMS;

/// Open/closed state of the collapsible menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Picking a destination always closes the menu.
    pub fn navigated(self) -> Self {
        Self { open: false }
    }
}

/// Whether the header should switch to its compact look at `offset`.
pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLLED_THRESHOLD_PX
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Receives the anchor id to scroll to.
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_state(MenuState::default);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().and_then(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    scrolled.set(is_scrolled(scroll_top));
                }) as Box<dyn FnMut()>);

                match window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    Ok(()) => Some(scroll_callback),
                    Err(e) => {
                        warn!("could not watch scroll position: {:?}", e);
                        None
                    }
                }
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let navigate = |anchor: &'static str| {
        let menu = menu.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.navigated());
            on_navigate.emit(anchor);
        })
    };

    let nav_class = if menu.open { "nav nav-open" } else { "nav" };

    html! {
        <header class={classes!("header", (*scrolled).then(|| "scrolled"))}>
            <a class="skip" href="#content">{"Skip to content"}</a>

            <div class="container header-inner">
                <a class="brand" href="#top" onclick={navigate("top")}>
                    <span class="brand-mark" aria-hidden="true">{"⬡"}</span>
                    <span class="brand-text">
                        {COMPANY.name}{" "}<span class="brand-sub">{"Official Website"}</span>
                    </span>
                </a>

                <button
                    class="menu-btn hover-tip"
                    data-tip="Open navigation menu"
                    type="button"
                    aria-expanded={menu.open.to_string()}
                    aria-controls="site-nav"
                    onclick={toggle_menu}
                >
                    {"Menu"}
                </button>

                <nav id="site-nav" class={nav_class}>
                    {
                        NAV_ITEMS.iter().map(|item| {
                            html! {
                                <button
                                    key={item.anchor}
                                    type="button"
                                    class="nav-link hover-tip"
                                    data-tip={format!("Go to {}", item.label)}
                                    onclick={navigate(item.anchor)}
                                >
                                    {item.label}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </nav>
            </div>
            <style>
                {r#"
                    .header {
                        position: sticky;
                        top: 0;
                        z-index: 10;
                        background: rgba(11, 16, 32, 0.72);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid transparent;
                        transition: background 0.3s ease, border-color 0.3s ease;
                    }
                    .header.scrolled {
                        background: rgba(11, 16, 32, 0.95);
                        border-bottom-color: rgba(124, 58, 237, 0.25);
                    }
                    .skip {
                        position: absolute;
                        left: -999px;
                    }
                    .skip:focus {
                        left: 1rem;
                        top: 1rem;
                    }
                    .header-inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 72px;
                    }
                    .brand {
                        display: flex;
                        gap: 0.5rem;
                        align-items: center;
                        color: #fff;
                        text-decoration: none;
                        font-weight: 700;
                    }
                    .brand-mark {
                        color: #06b6d4;
                        font-size: 1.4rem;
                    }
                    .brand-sub {
                        color: #94a3b8;
                        font-weight: 400;
                    }
                    .menu-btn {
                        display: none;
                    }
                    .nav {
                        display: flex;
                        gap: 0.25rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #cbd5e1;
                        padding: 0.5rem 0.9rem;
                        border-radius: 8px;
                        cursor: pointer;
                        font: inherit;
                    }
                    .nav-link:hover {
                        color: #fff;
                        background: rgba(124, 58, 237, 0.18);
                    }
                    @media (max-width: 768px) {
                        .menu-btn {
                            display: block;
                        }
                        .nav {
                            display: none;
                            position: absolute;
                            top: 72px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem;
                            background: rgba(11, 16, 32, 0.98);
                        }
                        .nav.nav-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn toggle_opens_then_closes() {
        let opened = MenuState::default().toggled();
        assert!(opened.open);
        assert!(!opened.toggled().open);
    }

    #[test]
    fn navigating_closes_an_open_menu() {
        let opened = MenuState::default().toggled();
        assert!(!opened.navigated().open);
        assert!(!MenuState::default().navigated().open);
    }

    #[test]
    fn compact_header_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(config::SCROLLED_THRESHOLD_PX));
        assert!(is_scrolled(config::SCROLLED_THRESHOLD_PX + 1.0));
        assert!(is_scrolled(2_000.0));
    }
}
