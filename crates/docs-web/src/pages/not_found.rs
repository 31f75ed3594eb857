use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <main class="max-w-[80ch] mx-auto px-4 py-16 text-center">
            <h1 class="text-xl font-bold mb-2">"404 - Page not found"</h1>
            <p class="text-[var(--ink-light)] mb-6">"The page you are looking for does not exist or has moved."</p>
            <Button variant=ButtonVariant::Primary href="/">
                "Go home"
            </Button>
        </main>
    }
}
