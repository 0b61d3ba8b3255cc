use yew::prelude::*;

use super::style_injection::ensure_document_style;

pub const STYLE_ID: &str = "geometric-background-styles";

pub const STYLESHEET: &str = r#"
@keyframes geo-enter {
    from { opacity: 0; transform: translateY(-150px) rotate(var(--geo-start-rotate)); }
    to { opacity: 1; transform: translateY(0) rotate(var(--geo-rotate)); }
}
@keyframes geo-float {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 15px; }
}
.geo-background {
    position: relative;
    min-height: 100vh;
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: var(--color-background);
}
.geo-wash {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom right, rgba(99, 102, 241, 0.05), transparent, rgba(244, 63, 94, 0.05));
    filter: blur(48px);
}
.geo-shapes {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}
.geo-shape {
    position: absolute;
    opacity: 0;
    animation: geo-enter 2.4s cubic-bezier(0.23, 0.86, 0.39, 0.96) forwards, geo-float 12s ease-in-out infinite;
}
.geo-pill {
    width: 100%;
    height: 100%;
    border-radius: 9999px;
    border: 2px solid rgba(255, 255, 255, 0.15);
    backdrop-filter: blur(2px);
    box-shadow: 0 8px 32px 0 rgba(255, 255, 255, 0.1);
}
.geo-pill::after {
    content: "";
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    background: radial-gradient(circle at 50% 50%, rgba(255, 255, 255, 0.2), transparent 70%);
}
.geo-fade {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background: linear-gradient(to top, var(--color-background), transparent, rgba(3, 3, 3, 0.8));
}
.geo-content {
    position: relative;
    z-index: 10;
    width: 100%;
}
"#;

/// One floating pill in the background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub width: u32,
    pub height: u32,
    pub rotate: i32,
    pub delay_ms: u32,
    pub gradient: &'static str,
    pub position: &'static str,
}

impl Shape {
    pub fn style(&self) -> String {
        format!(
            "{} width: {}px; height: {}px; --geo-rotate: {}deg; --geo-start-rotate: {}deg; animation-delay: {}ms, {}ms;",
            self.position,
            self.width,
            self.height,
            self.rotate,
            self.rotate - 15,
            self.delay_ms,
            self.delay_ms + 2_400,
        )
    }
}

pub const SHAPES: [Shape; 5] = [
    Shape {
        width: 600,
        height: 140,
        rotate: 12,
        delay_ms: 300,
        gradient: "rgba(99, 102, 241, 0.15)",
        position: "left: -10%; top: 15%;",
    },
    Shape {
        width: 500,
        height: 120,
        rotate: -15,
        delay_ms: 500,
        gradient: "rgba(244, 63, 94, 0.15)",
        position: "right: -5%; top: 70%;",
    },
    Shape {
        width: 300,
        height: 80,
        rotate: -8,
        delay_ms: 400,
        gradient: "rgba(139, 92, 246, 0.15)",
        position: "left: 5%; bottom: 5%;",
    },
    Shape {
        width: 200,
        height: 60,
        rotate: 20,
        delay_ms: 600,
        gradient: "rgba(245, 158, 11, 0.15)",
        position: "right: 15%; top: 10%;",
    },
    Shape {
        width: 150,
        height: 40,
        rotate: -25,
        delay_ms: 700,
        gradient: "rgba(6, 182, 212, 0.15)",
        position: "left: 20%; top: 5%;",
    },
];

#[derive(Properties, PartialEq)]
pub struct GeometricBackgroundProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GeometricBackground)]
pub fn geometric_background(props: &GeometricBackgroundProps) -> Html {
    use_effect_with_deps(
        |_| {
            ensure_document_style(STYLE_ID, STYLESHEET);
            || ()
        },
        (),
    );

    html! {
        <div class="geo-background">
            <div class="geo-wash"></div>
            <div class="geo-shapes" aria-hidden="true">
                { for SHAPES.iter().map(|shape| html! {
                    <div class="geo-shape" style={shape.style()}>
                        <div
                            class="geo-pill"
                            style={format!("background: linear-gradient(to right, {}, transparent);", shape.gradient)}
                        ></div>
                    </div>
                }) }
            </div>
            <div class="geo-content">
                { for props.children.iter() }
            </div>
            <div class="geo-fade"></div>
        </div>
    }
}
