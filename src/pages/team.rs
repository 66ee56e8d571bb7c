use yew::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::section::Section;
use crate::config;
use crate::data::team::TeamMember;

#[derive(Properties, PartialEq)]
pub struct TeamCardProps {
    pub member: TeamMember,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let member = &props.member;
    html! {
        <article class="team-card" data-tip="Team member details">
            <Avatar
                src={member.photo.map(config::asset_url)}
                alt={format!("{} portrait", member.name)}
            />
            <div class="team-body">
                <div class="team-name">{member.name}</div>
                <div class="team-role">{member.role}</div>
                <p class="team-bio">{member.bio}</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub members: &'static [TeamMember],
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    html! {
        <Section id="team" eyebrow={Some("Team Members")} title="Key Team Members">
            <div class="team-grid">
                {
                    props.members.iter().map(|member| html! {
                        <TeamCard key={member.name} member={member.clone()} />
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::team::TEAM;
    use crate::test_util::{count, render};

    static NO_PHOTO: &[TeamMember] = &[TeamMember {
        name: "Member D",
        role: "Intern",
        bio: "Joined last week.",
        photo: None,
    }];

    #[test]
    fn renders_one_card_per_member_in_order() {
        let html = render::<Team>(TeamProps { members: TEAM });
        assert_eq!(count(&html, r#"class="team-card""#), TEAM.len());

        let positions: Vec<_> = TEAM
            .iter()
            .map(|member| html.find(member.name).expect("member rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("/assets/team/memberA.svg"));
    }

    #[test]
    fn empty_roster_renders_no_cards() {
        let html = render::<Team>(TeamProps { members: &[] });
        assert_eq!(count(&html, r#"class="team-card""#), 0);
        assert!(html.contains(r#"id="team""#));
    }

    #[test]
    fn member_without_photo_gets_placeholder() {
        let html = render::<Team>(TeamProps { members: NO_PHOTO });
        assert!(html.contains("data:image/svg+xml,"));
        assert!(html.contains("avatar-placeholder"));
    }
}
