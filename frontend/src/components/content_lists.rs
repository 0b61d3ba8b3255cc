use yew::prelude::*;

use crate::api::{FetchState, TeamMember, Testimonial};
use crate::components::cards::GradientCard;
use crate::content::Offering;

fn optional_text(tag: &'static str, class: &'static str, text: Option<&String>) -> Html {
    match text {
        Some(text) => html! { <@{tag} class={class}>{text.clone()}</@> },
        None => html! {},
    }
}

fn status_line<T>(state: &FetchState<T>, what: &str) -> Option<Html> {
    match state {
        FetchState::Loading => Some(html! {
            <p class="fetch-status">{format!("Loading {}...", what)}</p>
        }),
        FetchState::Failed(e) => Some(html! {
            <p class="fetch-status error">{format!("Could not load {}: {}", what, e)}</p>
        }),
        FetchState::Loaded(_) => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamGridProps {
    pub state: FetchState<Vec<TeamMember>>,
}

#[function_component(TeamGrid)]
pub fn team_grid(props: &TeamGridProps) -> Html {
    if let Some(status) = status_line(&props.state, "the team") {
        return status;
    }
    let FetchState::Loaded(members) = &props.state else {
        return html! {};
    };

    html! {
        <div class="team-grid">
            { for members.iter().map(|member| html! {
                <article class="team-member">
                    {
                        match &member.image_url {
                            Some(src) => html! {
                                <img
                                    class="team-member-photo"
                                    src={src.clone()}
                                    loading="lazy"
                                    alt={member.name.clone().unwrap_or_default()}
                                />
                            },
                            None => html! {},
                        }
                    }
                    {optional_text("h3", "team-member-name", member.name.as_ref())}
                    {optional_text("p", "team-member-role", member.role.as_ref())}
                    {optional_text("p", "team-member-bio", member.bio.as_ref())}
                </article>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialListProps {
    pub state: FetchState<Vec<Testimonial>>,
}

#[function_component(TestimonialList)]
pub fn testimonial_list(props: &TestimonialListProps) -> Html {
    if let Some(status) = status_line(&props.state, "testimonials") {
        return status;
    }
    let FetchState::Loaded(quotes) = &props.state else {
        return html! {};
    };

    html! {
        <div class="testimonial-list">
            { for quotes.iter().map(|quote| {
                let byline = [quote.role.as_deref(), quote.company.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(", ");
                html! {
                    <figure class="testimonial">
                        {optional_text("blockquote", "testimonial-quote", quote.quote.as_ref())}
                        <figcaption>
                            {optional_text("span", "testimonial-author", quote.author.as_ref())}
                            {
                                if byline.is_empty() {
                                    html! {}
                                } else {
                                    html! { <span class="testimonial-byline">{byline}</span> }
                                }
                            }
                        </figcaption>
                    </figure>
                }
            }) }
        </div>
    }
}

pub fn offering_card(offering: &Offering) -> Html {
    html! {
        <GradientCard
            key={offering.slug}
            title={offering.title}
            icon={offering.icon}
            description={offering.description}
            solutions={offering.solutions.iter().map(|s| AttrValue::from(*s)).collect::<Vec<_>>()}
            slug={offering.slug}
            gradient_from={offering.gradient.0}
            gradient_to={offering.gradient.1}
        />
    }
}
