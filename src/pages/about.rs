use yew::prelude::*;

use crate::components::section::Section;
use crate::data::company::CompanyProfile;
use crate::data::content::{STATEMENTS, WORKING_PRINCIPLES};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub company: &'static CompanyProfile,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let company = props.company;
    let facts = [
        ("Company Name", company.name),
        ("Email", company.contact.email),
        ("Phone", company.contact.phone),
        ("Address", company.contact.address),
    ];

    html! {
        <Section id="about" eyebrow={Some("Background")} title="Mission, Vision, and Team">
            <div class="two-col">
                {
                    STATEMENTS.iter().map(|statement| html! {
                        <div key={statement.title} class="panel hover-tip" data-tip={format!("Our {} statement", statement.title.to_lowercase())}>
                            <h3 class="h3">{statement.title}</h3>
                            <p class="muted">{statement.body}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div class="about">
                <div class="about-text">
                    <h3 class="h3">{"How We Work"}</h3>
                    <p class="muted">
                        {"We reduce risk early through prototyping, clear iteration plans, and weekly reviews."}
                    </p>
                    <ul class="list">
                        { for WORKING_PRINCIPLES.iter().map(|principle| html! { <li key={*principle}>{*principle}</li> }) }
                    </ul>
                </div>

                <div class="about-card hover-tip" data-tip="Company basic information">
                    <div class="about-card-title">{"Company Information"}</div>
                    <dl class="dl">
                        {
                            facts.iter().map(|(term, value)| html! {
                                <div key={*term} class="dl-row">
                                    <dt>{*term}</dt>
                                    <dd>{*value}</dd>
                                </div>
                            }).collect::<Html>()
                        }
                    </dl>
                </div>
            </div>
        </Section>
    }
}
