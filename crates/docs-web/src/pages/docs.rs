use crate::config::{CONFIG, Guide};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{ArrowSide, Button, ButtonVariant, Section};
use crate::pages::NotFound;

/// Guide index: one card per configured guide
#[component]
pub fn DocsIndexPage() -> impl IntoView {
    view! {
        <Title text=format!("Guides - {}", CONFIG.name) />
        <main class="max-w-[80ch] mx-auto px-4 py-4 md:py-8">
            <header class="mb-8">
                <h1 class="text-xl font-bold mb-2">"Guides"</h1>
                <Button variant=ButtonVariant::Text arrow=ArrowSide::Left href="/">
                    "Home"
                </Button>
            </header>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                {CONFIG.guides.iter().map(|guide| view! { <GuideCard guide=guide /> }).collect_view()}
            </div>
        </main>
    }
}

#[component]
fn GuideCard(guide: &'static Guide) -> impl IntoView {
    view! {
        <div class="border border-dashed border-[var(--rule)] p-4">
            <h2 class="font-bold">{guide.title}</h2>
            <p class="mt-1 text-sm text-[var(--ink-light)]">{guide.summary}</p>
            <Button variant=ButtonVariant::Text arrow=ArrowSide::Right href=guide.href() class="mt-3">
                "Read more"
            </Button>
        </div>
    }
}

/// Single guide at `/docs/:slug`
#[component]
pub fn GuidePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || {
        let slug = slug();
        match CONFIG.guide(&slug) {
            Some(guide) => view! { <GuideContent guide=guide /> }.into_any(),
            None => {
                log::warn!("no guide for slug `{}`", slug);
                view! { <NotFound /> }.into_any()
            }
        }
    }
}

#[component]
fn GuideContent(guide: &'static Guide) -> impl IntoView {
    view! {
        <Title text=format!("{} - {}", guide.title, CONFIG.name) />
        <main class="max-w-[80ch] mx-auto px-4 py-4 md:py-8">
            <header class="mb-8">
                <h1 class="text-xl font-bold mb-2">{guide.title}</h1>
                <p class="text-[var(--ink-light)]">{guide.summary}</p>
            </header>
            {guide
                .sections
                .iter()
                .map(|section| {
                    view! {
                        <Section id=section.id title=section.title>
                            <p>{section.body}</p>
                        </Section>
                    }
                })
                .collect_view()}
            <Button variant=ButtonVariant::Text arrow=ArrowSide::Left href="/docs">
                "Back to guides"
            </Button>
        </main>
    }
}
