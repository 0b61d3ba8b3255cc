use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_testimonials, use_collection};
use crate::components::cards::GradientCard;
use crate::components::content_lists::{offering_card, TestimonialList};
use crate::components::geometric_background::GeometricBackground;
use crate::components::hero_text::HeroText;
use crate::content::{HERO_LEAD, HERO_WORDS, INDUSTRIES, SERVICES};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let testimonials = use_collection(fetch_testimonials);

    // Start at the top when arriving from another page.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let words = HERO_WORDS.iter().map(|w| AttrValue::from(*w)).collect::<Vec<_>>();

    html! {
        <div class="home-page">
            <GeometricBackground>
                <div class="hero-content">
                    <HeroText lead={HERO_LEAD} words={words} />
                    <p class="hero-subtitle">
                        {"A small studio of engineers and designers. We plan, build and run the software your business depends on."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::About} classes="hero-cta">
                            {"Meet the team"}
                        </Link<Route>>
                        <a href="#services" class="hero-secondary">{"What we do"}</a>
                    </div>
                </div>
            </GeometricBackground>

            <section id="services" class="card-section">
                <h2>{"Services"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(offering_card) }
                </div>
            </section>

            <section class="card-section">
                <h2>{"Industries"}</h2>
                <div class="card-grid">
                    { for INDUSTRIES.iter().map(offering_card) }
                </div>
            </section>

            <section class="testimonials-section">
                <h2>{"What clients say"}</h2>
                <TestimonialList state={testimonials} />
            </section>

            <section class="card-section">
                <div class="card-grid two">
                    <GradientCard
                        title="Start a project"
                        icon="✉️"
                        description="Tell us what you are building and we will get back within two working days."
                        href="mailto:hello@meridianlabs.dev"
                    />
                    <GradientCard
                        title="Open source"
                        icon="🧩"
                        description="Libraries we maintain and contribute to."
                        gradient_from="#10b981"
                        gradient_to="#3b82f6"
                    />
                </div>
            </section>
        </div>
    }
}
