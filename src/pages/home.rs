use yew::prelude::*;

use crate::config;
use crate::data::company::{CompanyProfile, COMPANY};
use crate::data::content::{DEMO_VIDEO, GALLERY, HERO_IMAGE, SERVICES};
use crate::data::team::TEAM;
use crate::pages::about::About;
use crate::pages::contact::Contact;
use crate::pages::media::Media;
use crate::pages::services::Services;
use crate::pages::team::Team;

#[derive(Properties, PartialEq)]
pub struct StatRowProps {
    pub company: &'static CompanyProfile,
}

#[function_component(StatRow)]
pub fn stat_row(props: &StatRowProps) -> Html {
    html! {
        <div class="stats">
            {
                props.company.highlights.iter().map(|highlight| html! {
                    <div key={highlight.label} class="stat-card hover-tip" data-tip={format!("Highlight: {}", highlight.label)}>
                        <div class="stat-value">{highlight.value}</div>
                        <div class="stat-label">{highlight.label}</div>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let jump = |anchor: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(anchor);
        })
    };

    html! {
        <section class="hero">
            <div class="container hero-inner">
                <div class="hero-copy">
                    <div class="pill">{"Rust + Yew · Company Homepage"}</div>
                    <h1 class="h1">
                        {COMPANY.name}{" "}<span class="accent">{"Official Site"}</span>
                    </h1>
                    <p class="lead">{COMPANY.tagline}</p>
                    <p class="muted">{COMPANY.summary}</p>

                    <div class="hero-ctas">
                        <a
                            class="btn primary hover-tip"
                            data-tip="Click to contact us and get an estimate"
                            href="#contact"
                            onclick={jump("contact")}
                        >
                            {"Get a Proposal"}
                        </a>
                        <a
                            class="btn ghost hover-tip"
                            data-tip="See what we can build for you"
                            href="#services"
                            onclick={jump("services")}
                        >
                            {"View Services"}
                        </a>
                    </div>

                    <StatRow company={&COMPANY} />
                </div>

                <div class="hero-media hover-tip" data-tip="Product showcase" aria-label="Product showcase image">
                    <img
                        class="hero-img"
                        alt="Product showcase: dashboard and mobile interface"
                        loading="lazy"
                        src={HERO_IMAGE}
                    />
                    <img class="hero-overlay" alt="" aria-hidden="true" src={config::asset_url("bridge.svg")} />
                    <div class="hero-badge">
                        <div class="badge-title">{"Delivery Principles"}</div>
                        <div class="badge-text">{"Usable · Scalable · Maintainable"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<&'static str>,
}

/// Every content section, top to bottom.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <main id="content">
            <Hero on_navigate={props.on_navigate.clone()} />
            <Services services={SERVICES} />
            <About company={&COMPANY} />
            <Team members={TEAM} />
            <Media gallery={GALLERY} video={&DEMO_VIDEO} />
            <Contact contact={&COMPANY.contact} />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{count, render};

    #[test]
    fn sections_follow_page_order() {
        let html = render::<Home>(HomeProps { on_navigate: Callback::from(|_| ()) });
        let positions: Vec<_> = ["services", "about", "team", "media", "contact"]
            .iter()
            .map(|id| html.find(&format!(r#"id="{}""#, id)).expect("section rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.find("hero").unwrap() < positions[0]);
    }

    #[test]
    fn hero_lists_every_highlight() {
        let html = render::<Home>(HomeProps { on_navigate: Callback::from(|_| ()) });
        assert_eq!(count(&html, r#"class="stat-card"#), COMPANY.highlights.len());
        assert_eq!(count(&html, r#"class="card"#), SERVICES.len());
        assert_eq!(count(&html, r#"class="media-figure"#), GALLERY.len());
    }
}
