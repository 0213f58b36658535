use dioxus::prelude::*;

use crate::Route;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "👥",
        "Team Management",
        "Organize your team structure with intuitive drag-and-drop interfaces.",
    ),
    (
        "📊",
        "Analytics",
        "Real-time insights into employee performance and company growth.",
    ),
    (
        "🛡",
        "Secure & Private",
        "Enterprise-grade security to keep your sensitive data safe.",
    ),
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            nav { class: "landing-nav",
                span { class: "landing-brand", "EmpManage" }
                div { class: "landing-nav-actions",
                    // Not wired to anything yet
                    button { class: "btn btn-ghost", "Sign In" }
                    Link { to: Route::Dashboard {}, class: "btn btn-light", "Get Started" }
                }
            }

            section { class: "hero",
                span { class: "badge", "🚀 The Future of Work is Here" }
                h1 { class: "hero-title",
                    "Master Your Workforce"
                    br {}
                    "with Precision."
                }
                p { class: "hero-subtitle",
                    "A premium dashboard to manage employees, payrolls, and performance with state-of-the-art UI components."
                }
                div { class: "hero-actions",
                    button { class: "btn btn-light btn-lg btn-pill", "Start Free Trial" }
                    button { class: "btn btn-outline btn-lg btn-pill", "View Demo" }
                }
            }

            div { class: "feature-grid",
                for (icon, title, description) in FEATURES {
                    div { key: "{title}", class: "card feature-card",
                        div { class: "feature-icon", "{icon}" }
                        h3 { class: "card-title", "{title}" }
                        p { class: "text-muted", "{description}" }
                    }
                }
            }
        }
    }
}
