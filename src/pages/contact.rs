use log::info;
use yew::prelude::*;

use crate::components::section::Section;
use crate::data::company::ContactInfo;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: &'static ContactInfo,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let contact = props.contact;

    // Demo form: nothing is sent anywhere.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("contact form submitted (demo only, nothing sent)");
    });

    html! {
        <Section id="contact" eyebrow={Some("Contact")} title="Let’s Work Together">
            <div class="contact">
                <div class="panel hover-tip" data-tip="Contact details">
                    <h3 class="h3">{"Contact Information"}</h3>
                    <p class="muted">{"Schedule a 15-minute consultation to discuss scope and timeline."}</p>
                    <ul class="list">
                        <li>
                            {"Email: "}
                            <a href={format!("mailto:{}", contact.email)}>{contact.email}</a>
                        </li>
                        <li>{format!("Phone: {}", contact.phone)}</li>
                        <li>{format!("Address: {}", contact.address)}</li>
                    </ul>
                </div>

                <div class="panel hover-tip" data-tip="This form is front-end demo only">
                    <h3 class="h3">{"Quick Message (Demo)"}</h3>
                    <form class="form" {onsubmit}>
                        <label class="field">
                            <span>{"Your Name"}</span>
                            <input placeholder="e.g. Alex" required=true />
                        </label>

                        <label class="field">
                            <span>{"Message"}</span>
                            <textarea placeholder="Briefly describe your request..." rows="4" required=true />
                        </label>

                        <button class="btn primary hover-tip" data-tip="Demo submit button" type="submit">
                            {"Submit"}
                        </button>
                    </form>
                </div>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::company::COMPANY;
    use crate::test_util::render;

    #[test]
    fn form_has_no_destination() {
        let html = render::<Contact>(ContactProps { contact: &COMPANY.contact });
        let form_start = html.find("<form").expect("form rendered");
        let form_tag = &html[form_start..form_start + html[form_start..].find('>').unwrap()];
        assert!(!form_tag.contains("action="));
        assert!(!form_tag.contains("method="));
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn email_is_a_mailto_link() {
        let html = render::<Contact>(ContactProps { contact: &COMPANY.contact });
        assert!(html.contains(r#"href="mailto:hello@starbridge.example""#));
        assert!(html.contains("Phone: +86 100-0000-0000"));
    }
}
