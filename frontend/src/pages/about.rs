use yew::prelude::*;

use crate::api::{fetch_team_members, use_collection};
use crate::components::content_lists::TeamGrid;
use crate::components::timeline::{Timeline, TimelineEntry};
use crate::content::MILESTONES;

#[function_component(About)]
pub fn about() -> Html {
    let team = use_collection(fetch_team_members);

    let entries = MILESTONES
        .iter()
        .map(|milestone| TimelineEntry {
            title: AttrValue::from(milestone.title),
            content: html! { <p>{milestone.text}</p> },
        })
        .collect::<Vec<_>>();

    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"About us"}</h1>
                <p>{"How a two-person shop turned into a studio, and who is here now."}</p>
            </section>

            <Timeline heading={"Our story"} entries={entries} />

            <section class="team-section">
                <h2>{"The team"}</h2>
                <TeamGrid state={team} />
            </section>
        </div>
    }
}
