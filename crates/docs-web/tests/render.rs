//! Server-side rendering of the shared button component.

use docs_web::components::button::{COMMON_CLASSES, arrow_class};
use docs_web::components::{ARROW_BASE_CLASSES, ArrowIcon, ArrowSide, Button, ButtonVariant};
use leptos::prelude::*;

/// Value of the first `class` attribute on the first `<tag` in `html`.
fn class_of<'a>(html: &'a str, tag: &str) -> &'a str {
    let open = html.find(&format!("<{}", tag)).unwrap_or_else(|| panic!("no <{}> in {}", tag, html));
    let rest = &html[open..];
    let start = rest.find("class=\"").expect("element has no class") + "class=\"".len();
    let end = rest[start..].find('"').unwrap();
    &rest[start..start + end]
}

#[test]
fn primary_without_destination_is_a_plain_button() {
    let html = view! { <Button variant=ButtonVariant::Primary>"Go"</Button> }.to_html();

    assert!(html.contains("<button"), "{}", html);
    assert!(html.contains("type=\"button\""));
    assert!(!html.contains("<a"));
    assert!(!html.contains("href="));
    assert!(!html.contains("<svg"));
    assert!(html.contains("Go"));

    let class = class_of(&html, "button");
    assert!(class.starts_with(COMMON_CLASSES));
    assert!(class.contains(ButtonVariant::Primary.classes()));
}

#[test]
fn outline_link_with_right_arrow() {
    let html = view! {
        <Button variant=ButtonVariant::Outline arrow=ArrowSide::Right href="/docs">
            "Read more"
        </Button>
    }
    .to_html();

    assert!(html.contains("<a"), "{}", html);
    assert!(html.contains("href=\"/docs\""));
    assert!(!html.contains("<button"));
    // in-app routes are left to the router
    assert!(!html.contains("target="));

    assert!(class_of(&html, "a").contains(ButtonVariant::Outline.classes()));

    let content_at = html.find("Read more").unwrap();
    let glyph_at = html.find("<svg").expect("glyph rendered");
    assert!(content_at < glyph_at);
    assert_eq!(html.matches("<svg").count(), 1);

    let glyph_class = class_of(&html, "svg");
    assert!(glyph_class.contains("-mr-1"));
    assert!(!glyph_class.contains("rotate-180"));
    assert!(!glyph_class.contains("top-px"));
}

#[test]
fn text_button_with_left_arrow() {
    let html = view! {
        <Button variant=ButtonVariant::Text arrow=ArrowSide::Left>
            "Back"
        </Button>
    }
    .to_html();

    assert!(html.contains("<button"), "{}", html);

    let glyph_at = html.find("<svg").expect("glyph rendered");
    let content_at = html.find("Back").unwrap();
    assert!(glyph_at < content_at);

    let glyph_class = class_of(&html, "svg");
    for modifier in ["rotate-180", "-ml-1", "relative top-px"] {
        assert!(glyph_class.contains(modifier), "missing {} in {}", modifier, glyph_class);
    }
    assert!(!glyph_class.contains("-mr-1"));
}

#[test]
fn extra_class_trails_variant_classes() {
    let html = view! {
        <Button variant=ButtonVariant::Secondary class="mt-4">
            "X"
        </Button>
    }
    .to_html();

    let class = class_of(&html, "button");
    assert!(class.ends_with("mt-4"), "{}", class);
    assert!(class.find(ButtonVariant::Secondary.classes()).unwrap() < class.find("mt-4").unwrap());
}

#[test]
fn variants_do_not_bleed_into_each_other() {
    for variant in ButtonVariant::ALL {
        let html = view! { <Button variant=variant>"label"</Button> }.to_html();
        let class = class_of(&html, "button");
        assert!(class.contains(variant.classes()));
        for other in ButtonVariant::ALL.into_iter().filter(|o| *o != variant) {
            assert!(!class.contains(other.classes()), "{} picked up {}", variant, other);
        }
    }
}

#[test]
fn link_and_button_share_the_class_string() {
    let link = view! { <Button variant=ButtonVariant::Filled href="/docs">"A"</Button> }.to_html();
    let button = view! { <Button variant=ButtonVariant::Filled>"A"</Button> }.to_html();
    assert_eq!(class_of(&link, "a"), class_of(&button, "button"));
}

#[test]
fn external_destination_opens_new_tab() {
    let html = view! {
        <Button variant=ButtonVariant::Outline href="https://github.com/example/docs-web">
            "GitHub"
        </Button>
    }
    .to_html();

    assert!(html.contains("href=\"https://github.com/example/docs-web\""));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn rendering_is_deterministic() {
    let render = || {
        view! {
            <Button variant=ButtonVariant::Text arrow=ArrowSide::Right href="/docs/quickstart" class="mt-3">
                "Read more"
            </Button>
        }
        .to_html()
    };
    assert_eq!(render(), render());
}

#[test]
fn arrow_icon_is_decorative() {
    let html = view! { <ArrowIcon /> }.to_html();

    assert!(html.contains("<svg"), "{}", html);
    assert!(html.contains("aria-hidden=\"true\""));
    assert!(html.contains("stroke=\"currentColor\""));
    assert_eq!(class_of(&html, "svg"), ARROW_BASE_CLASSES);
}

#[test]
fn arrow_icon_appends_extra_class() {
    let extra = arrow_class(ButtonVariant::Primary, ArrowSide::Left);
    let html = view! { <ArrowIcon class=extra.clone() /> }.to_html();
    assert_eq!(class_of(&html, "svg"), format!("{} {}", ARROW_BASE_CLASSES, extra));
}
