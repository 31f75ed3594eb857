use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::components::{ArrowSide, Button, ButtonVariant, Section};

#[component]
pub fn HomePage() -> impl IntoView {
    let canonical = format!("{}/", CONFIG.base_url);

    view! {
        <Title text=CONFIG.name />
        <Meta name="description" content=CONFIG.tagline />
        <Link rel="canonical" href=canonical />
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="text-2xl font-bold">{CONFIG.name}</h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
                <div class="mt-6 flex flex-wrap justify-center gap-3">
                    <Button variant=ButtonVariant::Filled arrow=ArrowSide::Right href="/docs">
                        "Get started"
                    </Button>
                    <Button variant=ButtonVariant::Outline href=CONFIG.github_url>
                        "View on GitHub"
                    </Button>
                </div>
            </header>

            // Every variant side by side, as a quick visual check of the styles
            <Section id="variants" title="Button variants">
                <div class="flex flex-wrap items-center gap-3">
                    {ButtonVariant::ALL
                        .into_iter()
                        .map(|variant| view! { <Button variant=variant>{variant.to_string()}</Button> })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap items-center gap-3">
                    <Button variant=ButtonVariant::Text arrow=ArrowSide::Left href="/docs">
                        "Back"
                    </Button>
                    <Button variant=ButtonVariant::Text arrow=ArrowSide::Right href="/docs/buttons">
                        "Read more"
                    </Button>
                </div>
            </Section>
        </main>
    }
}
