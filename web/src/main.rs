use api::{ApiConfig, EmployeeClient};
use dioxus::prelude::*;

mod views;

use views::{Dashboard, Landing};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    dioxus::logger::initialize_default();

    let config = match ApiConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid backend address: {e:#}");
            return;
        }
    };
    tracing::info!(base_url = %config.base_url, "using employee backend");

    #[cfg(feature = "web")]
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ApiConfig>();
    use_context_provider(|| EmployeeClient::new(config));

    rsx! {
        document::Title { "EmpManage" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
