use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use super::arrow_icon::ArrowIcon;

/// Layout classes shared by every variant. Always first in the class list.
pub const COMMON_CLASSES: &str =
    "inline-flex items-center justify-center gap-0.5 overflow-hidden text-sm font-medium transition-colors";

/// Visual style preset for [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Filled,
    Outline,
    Text,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [Self::Primary, Self::Secondary, Self::Filled, Self::Outline, Self::Text];

    /// Tailwind classes for this variant.
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Primary => "rounded-full px-3 py-1 bg-[var(--ink)] text-[var(--paper)] hover:bg-[var(--ink-light)]",
            Self::Secondary => "rounded-full px-3 py-1 bg-[var(--rule)] text-[var(--ink)] hover:bg-[var(--rule-strong)]",
            Self::Filled => "rounded-full px-3 py-1 bg-[var(--accent)] text-white hover:bg-[var(--accent-strong)]",
            Self::Outline => {
                "rounded-full px-3 py-1 border border-dashed border-[var(--rule)] text-[var(--ink)] hover:bg-[var(--rule)]"
            }
            Self::Text => "text-[var(--accent)] hover:text-[var(--accent-strong)]",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Filled => "filled",
            Self::Outline => "outline",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button variant `{0}` (expected primary, secondary, filled, outline or text)")]
pub struct ParseVariantError(pub String);

impl FromStr for ButtonVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseVariantError(tag.to_string()))
    }
}

/// Which side of the content the arrow glyph sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowSide {
    Left,
    Right,
}

impl ArrowSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for ArrowSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown arrow side `{0}` (expected left or right)")]
pub struct ParseArrowSideError(pub String);

impl FromStr for ArrowSide {
    type Err = ParseArrowSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if tag.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else {
            Err(ParseArrowSideError(tag.to_string()))
        }
    }
}

/// The element a [`Button`] renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonElement {
    /// `<a href>`; navigation is handled by the router (or the browser for external URLs).
    Link { href: String },
    /// `<button type="button">` with no navigation.
    Button,
}

impl ButtonElement {
    pub fn for_destination(href: Option<String>) -> Self {
        match href {
            Some(href) => Self::Link { href },
            None => Self::Button,
        }
    }
}

/// Absolute http(s) URLs open in a new tab; everything else stays in the app.
pub fn is_external(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Joins class fragments with single spaces, skipping blank ones.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Final class string: common layout, then variant, then caller classes.
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    join_classes([COMMON_CLASSES, variant.classes(), extra.unwrap_or_default()])
}

/// Modifier classes for the arrow glyph on `side`.
pub fn arrow_class(variant: ButtonVariant, side: ArrowSide) -> String {
    // text buttons sit on the baseline, nudge the glyph down to match
    let offset = if variant == ButtonVariant::Text { "relative top-px" } else { "" };
    let side_classes = match side {
        ArrowSide::Left => "-ml-1 rotate-180",
        ArrowSide::Right => "-mr-1",
    };
    join_classes([offset, side_classes])
}

/// Styled link or button with an optional arrow glyph.
///
/// Renders an `<a>` when `href` is set and a plain `<button type="button">`
/// otherwise; both carry the same class string.
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Outline arrow=ArrowSide::Right href="/docs">
///         "Read more"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Visual style preset
    variant: ButtonVariant,
    /// Extra classes, applied after the variant's so they can override it
    #[prop(optional, into)]
    class: Option<String>,
    /// Side to draw the arrow on; no arrow when unset
    #[prop(optional)]
    arrow: Option<ArrowSide>,
    /// Destination URL or route path; renders a link when set
    #[prop(optional, into)]
    href: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, class.as_deref());

    let leading = (arrow == Some(ArrowSide::Left)).then(|| {
        view! { <ArrowIcon class=arrow_class(variant, ArrowSide::Left) /> }
    });
    let trailing = (arrow == Some(ArrowSide::Right)).then(|| {
        view! { <ArrowIcon class=arrow_class(variant, ArrowSide::Right) /> }
    });
    let content = view! { {leading} {children()} {trailing} };

    match ButtonElement::for_destination(href) {
        ButtonElement::Link { href } => {
            let external = is_external(&href);
            view! {
                <a
                    href=href
                    class=class
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                >
                    {content}
                </a>
            }
            .into_any()
        }
        ButtonElement::Button => view! {
            <button type="button" class=class>
                {content}
            </button>
        }
        .into_any(),
    }
}
