//! Team member cards.

use leptos::prelude::*;

use crate::content::TeamMember;

#[component]
pub fn TeamGrid(members: &'static [TeamMember]) -> impl IntoView {
    view! {
        <div class="team-grid">
            {members.iter().map(|member| view! { <TeamCard member=*member/> }).collect_view()}
        </div>
    }
}

/// One member; falls back to initials on an accent disc without an avatar.
#[component]
fn TeamCard(member: TeamMember) -> impl IntoView {
    let avatar = match member.avatar {
        Some(src) => view! { <img class="team-card__avatar" src=src alt=member.name loading="lazy"/> }.into_any(),
        None => view! {
            <span class=format!("team-card__avatar team-card__avatar--initials {}", member.accent.class())>
                {member.initials()}
            </span>
        }
        .into_any(),
    };
    view! {
        <article class=format!("team-card {}", member.accent.class())>
            {avatar}
            <h3 class="team-card__name">{member.name}</h3>
            <p class="team-card__role">{member.role}</p>
        </article>
    }
}
