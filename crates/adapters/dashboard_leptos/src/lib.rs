use gpro_app::config::DashboardConfig;
use gpro_domain::classification::ClassificationType;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod config;
mod components;
pub mod logging;
mod pages;
pub mod runtime;
pub mod storage;
pub mod view;

use components::Nav;
use pages::{Download, Home, NotFound, TestPage};

/// Root application component.
///
/// Each test route names its classification mode explicitly.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route
                        path=path!("hardness")
                        view=|| view! { <TestPage classification=ClassificationType::SoftHard/> }
                    />
                    <Route
                        path=path!("fruit")
                        view=|| view! { <TestPage classification=ClassificationType::FreshRotten/> }
                    />
                    <Route path=path!("download") view=Download/>
                </Routes>
            </main>
        </Router>
    }
}
