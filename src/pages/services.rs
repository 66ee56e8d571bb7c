use yew::prelude::*;

use crate::components::section::Section;
use crate::data::content::Service;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <article class="card hover-tip" data-tip="Hover to focus this service">
            <h3 class="h3">{service.title}</h3>
            <p class="muted">{service.description}</p>
            <ul class="list">
                { for service.points.iter().map(|point| html! { <li key={*point}>{*point}</li> }) }
            </ul>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: &'static [Service],
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <Section id="services" eyebrow={Some("Products & Services")} title="What We Offer">
            <div class="grid3">
                {
                    props.services.iter().map(|service| html! {
                        <ServiceCard key={service.title} service={service.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}
