use leptos::prelude::*;

/// Guide section with an anchored heading so readers can deep-link into a page
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="mb-8 scroll-mt-16">
            <h2 class="group font-bold mb-3">
                {title}
                <a href=anchor_href class="ml-2 opacity-0 group-hover:opacity-100 text-[var(--ink-light)]">"#"</a>
            </h2>
            <div class="pl-4 border-l border-dashed border-[var(--rule)] space-y-3">
                {children()}
            </div>
        </section>
    }
}
