use std::rc::Rc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

pub const ROTATION_INTERVAL_MS: u32 = 2_000;

// Parked words sit this far (in % of their own height) above or below the slot.
const PARKED_OFFSET: i32 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn between(previous: usize, next: usize) -> Self {
        if next > previous {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Index after `current` in a list of `len` words, or None when the list is
/// too short to rotate at all.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len < 2 {
        return None;
    }
    Some((current + 1) % len)
}

/// Only lists that can actually rotate get an interval.
pub fn needs_timer(len: usize) -> bool {
    next_index(0, len).is_some()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WordRotation {
    pub current: usize,
    pub previous: Option<usize>,
}

impl WordRotation {
    pub fn advance(self, len: usize) -> Option<Self> {
        next_index(self.current, len).map(|next| Self {
            current: next,
            previous: Some(self.current),
        })
    }

    pub fn direction(&self) -> Direction {
        match self.previous {
            Some(previous) => Direction::between(previous, self.current),
            None => Direction::Up,
        }
    }

    /// Vertical offset (percent) and opacity for word `index`.
    pub fn pose(&self, index: usize) -> (i32, f32) {
        if index == self.current {
            return (0, 1.0);
        }
        if self.previous == Some(index) {
            let offset = match self.direction() {
                Direction::Up => -PARKED_OFFSET,
                Direction::Down => PARKED_OFFSET,
            };
            return (offset, 0.0);
        }
        if index < self.current {
            (-PARKED_OFFSET, 0.0)
        } else {
            (PARKED_OFFSET, 0.0)
        }
    }
}

/// The reducer action is the current word count.
impl Reducible for WordRotation {
    type Action = usize;

    fn reduce(self: Rc<Self>, len: usize) -> Rc<Self> {
        match self.advance(len) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroTextProps {
    pub lead: AttrValue,
    #[prop_or_default]
    pub words: Vec<AttrValue>,
}

#[function_component(HeroText)]
pub fn hero_text(props: &HeroTextProps) -> Html {
    let rotation = use_reducer_eq(WordRotation::default);
    let len = props.words.len();

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |len| {
                let len = *len;
                let interval = needs_timer(len).then(|| {
                    Interval::new(ROTATION_INTERVAL_MS, move || dispatcher.dispatch(len))
                });
                move || drop(interval)
            },
            len,
        );
    }

    let words = if props.words.is_empty() {
        html! {}
    } else {
        // The list can shrink under a running rotation.
        let state = WordRotation {
            current: rotation.current % len,
            previous: rotation.previous.filter(|p| *p < len),
        };
        html! {
            <span class={classes!("hero-words", match state.direction() {
                Direction::Up => "rotating-up",
                Direction::Down => "rotating-down",
            })}>
                { for props.words.iter().enumerate().map(|(index, word)| {
                    let (offset, opacity) = state.pose(index);
                    html! {
                        <span
                            key={index}
                            class="hero-word"
                            aria-hidden={(index != state.current).to_string()}
                            style={format!("transform: translateY({}%); opacity: {};", offset, opacity)}
                        >
                            {word.clone()}
                        </span>
                    }
                }) }
            </span>
        }
    };

    html! {
        <h1 class="hero-text">
            <span class="hero-lead">{props.lead.clone()}</span>
            {words}
            <style>
                {r#"
                    .hero-text {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        text-align: center;
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        letter-spacing: -0.02em;
                    }
                    .hero-words {
                        position: relative;
                        display: flex;
                        width: 100%;
                        justify-content: center;
                        overflow: hidden;
                        height: 1.3em;
                    }
                    .hero-word {
                        position: absolute;
                        font-weight: 600;
                        color: var(--color-accent);
                        transition: transform 0.6s cubic-bezier(0.22, 1, 0.36, 1), opacity 0.4s ease-out;
                    }
                "#}
            </style>
        </h1>
    }
}
