use leptos::prelude::*;

use super::button::join_classes;

/// Size and alignment every arrow glyph gets before caller modifiers.
pub const ARROW_BASE_CLASSES: &str = "mt-0.5 h-5 w-5";

/// Decorative right-pointing arrow. Strokes with `currentColor` so it follows the text color.
#[component]
pub fn ArrowIcon(
    /// Extra classes, e.g. `rotate-180` to point left
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" fill="none" aria-hidden="true" class=join_classes([ARROW_BASE_CLASSES, class.as_str()])>
            <path
                stroke="currentColor"
                stroke-linecap="round"
                stroke-linejoin="round"
                d="m11.5 6.5 3 3.5m0 0-3 3.5m3-3.5h-9"
            />
        </svg>
    }
}
