use chrono::Datelike;
use yew::prelude::*;

use crate::data::company::COMPANY;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_back_to_top: Callback<()>,
}

pub fn copyright_line(year: i32, company: &str) -> String {
    format!("© {} {}. All rights reserved.", year, company)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    let back_to_top = {
        let on_back_to_top = props.on_back_to_top.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_back_to_top.emit(());
        })
    };

    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="muted">{copyright_line(year, COMPANY.name)}</div>
                <div class="muted">
                    {"Built with Rust + Yew. "}
                    <a href="#top" onclick={back_to_top}>{"Back to top"}</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_company() {
        assert_eq!(
            copyright_line(2026, "StarBridge Tech"),
            "© 2026 StarBridge Tech. All rights reserved."
        );
    }
}
