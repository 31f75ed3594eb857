use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{DocsIndexPage, GuidePage, HomePage, NotFound};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/docs") view=DocsIndexPage />
                <Route path=path!("/docs/:slug") view=GuidePage />
            </Routes>
        </Router>
    }
}
