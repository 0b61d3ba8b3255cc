use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const INDUSTRY_PREFIX: &str = "industries/";

/// Where a card leads, if anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardLink {
    /// Focusable but goes nowhere.
    Static,
    /// The whole card is a link.
    Href(String),
    /// The card carries a call-to-action link to a detail page.
    CallToAction(String),
}

impl CardLink {
    /// `href` takes precedence over `slug`; blank values count as absent.
    pub fn resolve(href: Option<&str>, slug: Option<&str>) -> Self {
        if let Some(href) = present(href) {
            return CardLink::Href(href.to_string());
        }
        match present(slug) {
            Some(slug) => CardLink::CallToAction(slug_path(slug)),
            None => CardLink::Static,
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `/services/<slug>`, except industry slugs which already name their section.
pub fn slug_path(slug: &str) -> String {
    let slug = slug.trim_start_matches('/');
    if slug.starts_with(INDUSTRY_PREFIX) {
        format!("/{}", slug)
    } else {
        format!("/services/{}", slug)
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub solutions: Vec<AttrValue>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub slug: Option<AttrValue>,
    #[prop_or(AttrValue::Static("Learn more"))]
    pub cta_label: AttrValue,
    #[prop_or(AttrValue::Static("#6366f1"))]
    pub gradient_from: AttrValue,
    #[prop_or(AttrValue::Static("#ec4899"))]
    pub gradient_to: AttrValue,
}

#[function_component(GradientCard)]
pub fn gradient_card(props: &GradientCardProps) -> Html {
    let link = CardLink::resolve(props.href.as_deref(), props.slug.as_deref());
    let style = format!(
        "--card-from: {}; --card-to: {};",
        props.gradient_from, props.gradient_to
    );

    let body = html! {
        <>
            <div class="gradient-card-glow" aria-hidden="true"></div>
            <div class="gradient-card-inner">
                {
                    if let Some(icon) = &props.icon {
                        html! { <div class="gradient-card-icon" aria-hidden="true">{icon.clone()}</div> }
                    } else {
                        html! {}
                    }
                }
                <h3 class="gradient-card-title">{props.title.clone()}</h3>
                {
                    if let Some(description) = &props.description {
                        html! { <p class="gradient-card-description">{description.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    if props.solutions.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="gradient-card-solutions">
                                { for props.solutions.iter().map(|s| html! { <li>{s.clone()}</li> }) }
                            </ul>
                        }
                    }
                }
            </div>
        </>
    };

    match link {
        CardLink::Static => html! {
            <div class="gradient-card" tabindex="0" style={style}>
                {body}
            </div>
        },
        CardLink::Href(href) => html! {
            <a class="gradient-card" href={href} style={style}>
                {body}
            </a>
        },
        CardLink::CallToAction(path) => {
            let cta = match Route::recognize(&path) {
                Some(route) => html! {
                    <Link<Route> to={route} classes="gradient-card-cta">
                        {props.cta_label.clone()}{" →"}
                    </Link<Route>>
                },
                None => html! {
                    <a class="gradient-card-cta" href={path}>{props.cta_label.clone()}{" →"}</a>
                },
            };
            html! {
                <div class="gradient-card" tabindex="0" style={style}>
                    {body}
                    <div class="gradient-card-footer">{cta}</div>
                </div>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_link_is_static() {
        assert_eq!(CardLink::resolve(None, None), CardLink::Static);
        assert_eq!(CardLink::resolve(Some(""), Some("  ")), CardLink::Static);
    }

    #[test]
    fn href_links_the_whole_card() {
        assert_eq!(
            CardLink::resolve(Some("https://example.com/case-study"), None),
            CardLink::Href("https://example.com/case-study".to_string())
        );
    }

    #[test]
    fn href_beats_slug() {
        assert_eq!(
            CardLink::resolve(Some("/about"), Some("web-development")),
            CardLink::Href("/about".to_string())
        );
    }

    #[test]
    fn service_slug_goes_under_services() {
        assert_eq!(
            CardLink::resolve(None, Some("web-development")),
            CardLink::CallToAction("/services/web-development".to_string())
        );
    }

    #[test]
    fn industry_slug_is_used_directly() {
        assert_eq!(slug_path("industries/healthcare"), "/industries/healthcare");
        assert_eq!(slug_path("/industries/retail"), "/industries/retail");
    }

    #[test]
    fn prefix_must_be_a_whole_segment() {
        assert_eq!(slug_path("industries-overview"), "/services/industries-overview");
    }
}
