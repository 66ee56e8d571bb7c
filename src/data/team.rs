#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    /// Path below the asset base. Members without one get the placeholder avatar.
    pub photo: Option<&'static str>,
}

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Member A (LI MINGXING)",
        role: "CEO / Product Lead",
        bio: "Responsible for company strategy, requirement analysis, and delivery management, ensuring each release solves real business problems.",
        photo: Some("team/memberA.svg"),
    },
    TeamMember {
        name: "Member B (SHI FEILE)",
        role: "UI/UX Designer",
        bio: "Focuses on information architecture, visual systems, and interaction details to ensure clarity and usability across all devices.",
        photo: Some("team/memberB.svg"),
    },
    TeamMember {
        name: "Member C (ZHENG LIULE)",
        role: "Front-end Engineer (React)",
        bio: "Responsible for component-based development, performance optimization, and responsive layouts to build scalable front-end systems.",
        photo: Some("team/memberC.svg"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn every_photo_is_shipped() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for member in TEAM {
            let photo = member.photo.expect("roster members have portraits");
            assert!(assets.join(photo).is_file(), "missing assets/{}", photo);
        }
    }

    #[test]
    fn roster_keeps_original_roles() {
        let roles: Vec<_> = TEAM.iter().map(|member| member.role).collect();
        assert_eq!(roles, ["CEO / Product Lead", "UI/UX Designer", "Front-end Engineer (React)"]);
    }
}
