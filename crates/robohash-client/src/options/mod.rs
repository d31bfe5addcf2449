//! Request options RoboHash understands.
//!
//! Each option knows its wire name and how to render itself as a
//! query-string parameter. All of them parse from text, accepting both the
//! descriptive name and the wire name, which is what the CLI relies on.

mod background_set;
mod image_extension;
mod image_set;
mod url_parameter;
mod use_gravatar;

pub use background_set::BackgroundSet;
pub use image_extension::ImageExtension;
pub use image_set::ImageSet;
pub use url_parameter::UrlParameter;
pub use use_gravatar::UseGravatar;

/// Spellings accepted for the "let RoboHash choose" variants.
fn matches_any(value: &str) -> bool {
    matches!(value, "any" | "random")
}
