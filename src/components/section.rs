use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: &'static str,
    #[prop_or_default]
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    #[prop_or_default]
    pub children: Children,
}

/// Anchored page section with a heading block.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id} class="section">
            <div class="container">
                <div class="section-head">
                    {
                        if let Some(eyebrow) = props.eyebrow {
                            html! { <div class="eyebrow">{eyebrow}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <h2 class="h2">{props.title}</h2>
                </div>
                { for props.children.iter() }
            </div>
        </section>
    }
}
