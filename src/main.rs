use yew::prelude::*;
use stylist::yew::Global;
use log::{info, warn};

mod config;
mod nav;
mod scroll;
mod seo;
mod styles;
mod data {
    pub mod company;
    pub mod content;
    pub mod team;
}
mod components {
    pub mod avatar;
    pub mod footer;
    pub mod header;
    pub mod section;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod media;
    pub mod services;
    pub mod team;
}
#[cfg(test)]
mod test_util;

use components::{footer::Footer, header::Header};
use data::company::COMPANY;
use pages::home::Home;
use scroll::ScrollAnimator;


#[function_component]
fn StructuredData() -> Html {
    match seo::organization_json_ld(&COMPANY) {
        Ok(json) => html! {
            <script type="application/ld+json">{json}</script>
        },
        Err(e) => {
            warn!("skipping structured data: {}", e);
            html! {}
        }
    }
}


#[function_component]
fn App() -> Html {
    // One animator per page so a new scroll always replaces the previous one.
    let animator = use_memo(|_| ScrollAnimator::new(), ());

    let on_navigate = {
        let animator = animator.clone();
        Callback::from(move |anchor: &'static str| {
            nav::navigate_to(&animator, anchor);
        })
    };

    let on_back_to_top = {
        let animator = animator.clone();
        Callback::from(move |_| {
            if let Err(e) = animator.scroll_to(0.0) {
                warn!("could not scroll to top: {}", e);
            }
        })
    };

    html! {
        <div id="top" class="page">
            <Global css={styles::global_style()} />
            <StructuredData />
            <Header on_navigate={on_navigate.clone()} />
            <Home {on_navigate} />
            <Footer {on_back_to_top} />
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", COMPANY.name);
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::render;

    #[test]
    fn app_renders_full_page() {
        let html = render::<App>(());
        for anchor in ["top", "content", "services", "about", "team", "media", "contact"] {
            assert!(html.contains(&format!(r#"id="{}""#, anchor)), "missing #{}", anchor);
        }
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn menu_renders_every_nav_item() {
        let html = render::<App>(());
        for item in data::content::NAV_ITEMS {
            assert!(html.contains(&format!("Go to {}", item.label)));
        }
        assert!(html.contains(r#"aria-expanded="false""#));
    }
}
