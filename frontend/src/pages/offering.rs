use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{find_industry, find_service, Offering};
use crate::pages::not_found::NotFound;
use crate::Route;

fn offering_page(offering: &Offering, kind: &str) -> Html {
    html! {
        <div class="offering-page">
            <section
                class="page-hero"
                style={format!("--card-from: {}; --card-to: {};", offering.gradient.0, offering.gradient.1)}
            >
                <span class="offering-kind">{kind.to_string()}</span>
                <h1><span aria-hidden="true">{offering.icon}</span>{" "}{offering.title}</h1>
                <p>{offering.description}</p>
            </section>
            {
                if offering.solutions.is_empty() {
                    html! {}
                } else {
                    html! {
                        <section class="offering-solutions">
                            <h2>{"What we deliver"}</h2>
                            <ul>
                                { for offering.solutions.iter().map(|s| html! { <li>{*s}</li> }) }
                            </ul>
                        </section>
                    }
                }
            }
            <Link<Route> to={Route::Home} classes="back-link">
                {"← Back to home"}
            </Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OfferingProps {
    pub slug: String,
}

#[function_component(ServicePage)]
pub fn service_page(props: &OfferingProps) -> Html {
    match find_service(&props.slug) {
        Some(service) => offering_page(service, "Service"),
        None => {
            log::warn!("Unknown service {}", props.slug);
            html! { <NotFound /> }
        }
    }
}

#[function_component(IndustryPage)]
pub fn industry_page(props: &OfferingProps) -> Html {
    match find_industry(&props.slug) {
        Some(industry) => offering_page(industry, "Industry"),
        None => {
            log::warn!("Unknown industry {}", props.slug);
            html! { <NotFound /> }
        }
    }
}
