use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::dom::{self, WindowListener};

// Fraction of the viewport where the fill starts and where it completes.
const START_EDGE: f64 = 0.1;
const END_EDGE: f64 = 0.5;
const LATE_MEASURE_MS: u32 = 100;

/// Maps the timeline section's position to [0, 1]. 0 while its top is below
/// `START_EDGE` of the viewport, 1 once its bottom has risen to `END_EDGE`.
pub fn scroll_progress(top: f64, viewport_height: f64, height: f64) -> f64 {
    let start = START_EDGE * viewport_height;
    let end_top = END_EDGE * viewport_height - height;
    let span = start - end_top;
    if !span.is_finite() || span <= 0.0 {
        return if top <= start { 1.0 } else { 0.0 };
    }
    let progress = (start - top) / span;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineFill {
    pub height: f64,
    pub opacity: f64,
}

impl LineFill {
    pub fn at(progress: f64, measured_height: f64) -> Self {
        let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            height: progress * measured_height.max(0.0),
            opacity: progress,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct TimelineEntry {
    pub title: AttrValue,
    pub content: Html,
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub entries: Vec<TimelineEntry>,
    #[prop_or_default]
    pub heading: Option<AttrValue>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    let container_ref = use_node_ref();
    let entries_ref = use_node_ref();
    let measured_height = use_state_eq(|| 0.0_f64);
    let progress = use_state_eq(|| 0.0_f64);

    // Progress follows the whole section; the line height is the entry list's.
    let update_progress = {
        let container_ref = container_ref.clone();
        let progress = progress.clone();
        move || {
            let (Some((top, height)), Some(viewport)) =
                (dom::element_rect(&container_ref), dom::viewport_height())
            else {
                return;
            };
            progress.set(scroll_progress(top, viewport, height));
        }
    };

    // Height: on mount, a little after mount for late fonts/images, and on resize.
    {
        let entries_ref = entries_ref.clone();
        let measured_height = measured_height.clone();
        let update_progress = update_progress.clone();
        use_effect_with_deps(
            move |_| {
                let measure = move || {
                    if let Some((_, height)) = dom::element_rect(&entries_ref) {
                        measured_height.set(height);
                    }
                };
                measure();
                let late = {
                    let measure = measure.clone();
                    Timeout::new(LATE_MEASURE_MS, move || measure())
                };
                // Resizing moves the viewport anchors as well as the height.
                let resize = WindowListener::new("resize", move || {
                    measure();
                    update_progress();
                });
                move || {
                    drop(late);
                    drop(resize);
                }
            },
            props.entries.len(),
        );
    }

    use_effect_with_deps(
        move |_| {
            update_progress();
            let scroll = WindowListener::new("scroll", update_progress);
            move || drop(scroll)
        },
        (),
    );

    if props.entries.is_empty() {
        return html! {};
    }

    let fill = LineFill::at(*progress, *measured_height);

    html! {
        <section class="timeline" ref={container_ref}>
            {
                if let Some(heading) = &props.heading {
                    html! { <h2 class="timeline-heading">{heading.clone()}</h2> }
                } else {
                    html! {}
                }
            }
            <div class="timeline-entries" ref={entries_ref}>
                { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <div key={index} class={classes!("timeline-entry", if index % 2 == 0 { "left" } else { "right" })}>
                        <div class="timeline-marker"></div>
                        <div class="timeline-card">
                            <h3>{entry.title.clone()}</h3>
                            {entry.content.clone()}
                        </div>
                    </div>
                }) }
                <div class="timeline-line" style={format!("height: {}px;", *measured_height)}>
                    <div
                        class="timeline-line-fill"
                        style={format!("height: {:.1}px; opacity: {:.3};", fill.height, fill.opacity)}
                    ></div>
                </div>
            </div>
            <style>
                {r#"
                    .timeline {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: var(--space-16) var(--space-4);
                    }
                    .timeline-heading {
                        text-align: center;
                        margin-bottom: var(--space-12);
                    }
                    .timeline-entries {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: var(--space-12);
                    }
                    .timeline-entry {
                        position: relative;
                        width: 50%;
                        box-sizing: border-box;
                    }
                    .timeline-entry.left {
                        align-self: flex-start;
                        padding-right: var(--space-8);
                        text-align: right;
                    }
                    .timeline-entry.right {
                        align-self: flex-end;
                        padding-left: var(--space-8);
                    }
                    .timeline-marker {
                        position: absolute;
                        top: 0.4rem;
                        width: 14px;
                        height: 14px;
                        border-radius: 50%;
                        background: var(--color-surface);
                        border: 2px solid var(--color-accent);
                        z-index: 1;
                    }
                    .timeline-entry.left .timeline-marker { right: -8px; }
                    .timeline-entry.right .timeline-marker { left: -8px; }
                    .timeline-card {
                        background: var(--color-surface);
                        border: 1px solid var(--color-border);
                        border-radius: var(--radius-lg);
                        padding: var(--space-6);
                    }
                    .timeline-line {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        width: 2px;
                        transform: translateX(-50%);
                        overflow: hidden;
                        background: linear-gradient(to bottom, transparent, var(--color-border) 10%, var(--color-border) 90%, transparent);
                    }
                    .timeline-line-fill {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        border-radius: 999px;
                        background: linear-gradient(to top, var(--color-accent), var(--color-accent-alt) 10%, transparent);
                    }
                    @media (max-width: 768px) {
                        .timeline-entry,
                        .timeline-entry.left,
                        .timeline-entry.right {
                            width: 100%;
                            align-self: stretch;
                            text-align: left;
                            padding: 0 0 0 var(--space-8);
                        }
                        .timeline-entry.left .timeline-marker { left: -8px; right: auto; }
                        .timeline-line { left: 0; transform: none; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;
    const HEIGHT: f64 = 2000.0;

    #[test]
    fn zero_until_top_reaches_start_edge() {
        assert_eq!(scroll_progress(900.0, VIEWPORT, HEIGHT), 0.0);
        assert_eq!(scroll_progress(100.0, VIEWPORT, HEIGHT), 0.0);
    }

    #[test]
    fn one_once_bottom_reaches_end_edge() {
        // bottom = top + height = 500
        assert_eq!(scroll_progress(-1500.0, VIEWPORT, HEIGHT), 1.0);
        assert_eq!(scroll_progress(-4000.0, VIEWPORT, HEIGHT), 1.0);
    }

    #[test]
    fn linear_in_between() {
        // span = 100 - (500 - 2000) = 1600
        assert!((scroll_progress(-700.0, VIEWPORT, HEIGHT) - 0.5).abs() < 1e-9);
        assert!((scroll_progress(-300.0, VIEWPORT, HEIGHT) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn short_container_switches_at_start_edge() {
        assert_eq!(scroll_progress(150.0, VIEWPORT, 200.0), 0.0);
        assert_eq!(scroll_progress(100.0, VIEWPORT, 200.0), 1.0);
    }

    #[test]
    fn fill_tracks_progress() {
        assert_eq!(LineFill::at(0.0, 800.0), LineFill { height: 0.0, opacity: 0.0 });
        assert_eq!(LineFill::at(1.0, 800.0), LineFill { height: 800.0, opacity: 1.0 });
        assert_eq!(LineFill::at(0.25, 800.0), LineFill { height: 200.0, opacity: 0.25 });
    }

    #[test]
    fn fill_starts_when_the_section_reaches_the_start_edge() {
        // Heading and padding put the entry list 150px below the section top.
        let (section_top, section_height) = (100.0, 2400.0);
        let (entries_top, entries_height) = (250.0, 2100.0);

        assert_eq!(scroll_progress(section_top, VIEWPORT, section_height), 0.0);
        assert!(scroll_progress(section_top - 1.0, VIEWPORT, section_height) > 0.0);

        // Section bottom at 50% of the viewport completes the fill.
        let done = scroll_progress(500.0 - section_height, VIEWPORT, section_height);
        assert_eq!(LineFill::at(done, entries_height).height, entries_height);

        // Measuring the entry list instead would lag behind.
        assert_eq!(scroll_progress(entries_top - 1.0, VIEWPORT, entries_height), 0.0);
    }

    #[test]
    fn unmeasured_line_is_empty() {
        assert_eq!(LineFill::at(0.7, 0.0).height, 0.0);
        assert_eq!(LineFill::at(f64::NAN, 500.0), LineFill::default());
    }
}
