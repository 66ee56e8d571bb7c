#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

/// Everything the page says about the company itself.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [Highlight],
    pub contact: ContactInfo,
}

pub static COMPANY: CompanyProfile = CompanyProfile {
    name: "StarBridge Tech",
    tagline: "Connecting design, engineering, and data into scalable product experiences",
    summary: "We are a product-focused team specializing in Web applications and data visualization platforms, delivering end-to-end solutions from brand design and front-end development to cloud deployment.",
    highlights: &[
        Highlight { label: "Founded", value: "2025" },
        Highlight { label: "Deliveries", value: "30+ Projects" },
        Highlight { label: "Expertise", value: "React / Node / Data Visualization" },
        Highlight { label: "Services", value: "UI/UX · Web · IoT Dashboard · Cloud Deployment" },
    ],
    contact: ContactInfo {
        email: "hello@starbridge.example",
        phone: "+86 100-0000-0000",
        address: "Guangdong, China · Remote Collaboration / On-site Meetings Available",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_keep_original_copy() {
        let expertise = COMPANY
            .highlights
            .iter()
            .find(|h| h.label == "Expertise")
            .map(|h| h.value);
        assert_eq!(expertise, Some("React / Node / Data Visualization"));
        assert_eq!(COMPANY.highlights.len(), 4);
    }
}
