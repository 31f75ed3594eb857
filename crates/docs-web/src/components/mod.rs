mod arrow_icon;
pub mod button;
mod section;

pub use arrow_icon::{ARROW_BASE_CLASSES, ArrowIcon};
pub use button::{ArrowSide, Button, ButtonElement, ButtonVariant, ParseArrowSideError, ParseVariantError};
pub use section::Section;
