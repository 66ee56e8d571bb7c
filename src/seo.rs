//! schema.org `Organization` markup for search engines.

use serde::Serialize;

use crate::data::company::CompanyProfile;

#[derive(Serialize)]
struct ContactPoint<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    email: &'a str,
    telephone: &'a str,
    #[serde(rename = "contactType")]
    contact_type: &'static str,
}

#[derive(Serialize)]
struct Organization<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    slogan: &'a str,
    description: &'a str,
    email: &'a str,
    address: &'a str,
    #[serde(rename = "contactPoint")]
    contact_point: ContactPoint<'a>,
}

pub fn organization_json_ld(company: &CompanyProfile) -> Result<String, serde_json::Error> {
    let organization = Organization {
        context: "https://schema.org",
        kind: "Organization",
        name: company.name,
        slogan: company.tagline,
        description: company.summary,
        email: company.contact.email,
        address: company.contact.address,
        contact_point: ContactPoint {
            kind: "ContactPoint",
            email: company.contact.email,
            telephone: company.contact.phone,
            contact_type: "sales",
        },
    };
    serde_json::to_string(&organization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::company::COMPANY;

    #[test]
    fn json_ld_describes_the_company() {
        let json = organization_json_ld(&COMPANY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], COMPANY.name);
        assert_eq!(value["email"], "hello@starbridge.example");
        assert_eq!(value["contactPoint"]["telephone"], COMPANY.contact.phone);
    }
}
