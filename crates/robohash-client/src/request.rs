//! The RoboHash request builder.
//!
//! A [`RoboHashRequestBuilder`] collects every option of a single avatar
//! request and enforces the invariants RoboHash relies on: a non-blank key,
//! non-zero dimensions, and an image-set list that is never empty (an empty
//! selection collapses to [`ImageSet::Any`]).

use std::fmt;

use serde::Serialize;

use crate::error::{RoboHashError, RoboHashResult};
use crate::options::{BackgroundSet, ImageExtension, ImageSet, UseGravatar};
use crate::url::{DEFAULT_BASE_URL, render_request_url};
use crate::util::is_valid_url_chars;

/// Default avatar width in pixels.
pub const DEFAULT_WIDTH: u32 = 300;

/// Default avatar height in pixels.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Builder for a single RoboHash avatar request.
///
/// # Example
///
/// ```
/// use robohash_client::{BackgroundSet, ImageExtension, ImageSet, RoboHashRequestBuilder};
///
/// let mut request = RoboHashRequestBuilder::new("nathan-cheshire")?;
/// request
///     .add_image_set(ImageSet::Monsters)
///     .set_background_set(BackgroundSet::Outside)
///     .set_image_extension(ImageExtension::Jpg)
///     .set_size(600, 600)?;
///
/// assert_eq!(
///     request.build_request_url(),
///     "https://robohash.org/nathan-cheshire.jpg?set=set2&bgset=bg1&size=600x600"
/// );
/// # Ok::<(), robohash_client::RoboHashError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoboHashRequestBuilder {
    avatar_key: String,
    image_sets: Vec<ImageSet>,
    background_set: BackgroundSet,
    width: u32,
    height: u32,
    use_gravatar: UseGravatar,
    ignore_extension: bool,
    image_extension: ImageExtension,
    safe_url_mode: bool,
}

impl RoboHashRequestBuilder {
    /// Create a builder for `avatar_key` with safe URL mode enabled.
    pub fn new(avatar_key: impl Into<String>) -> RoboHashResult<Self> {
        Self::with_safe_url_mode(avatar_key, true)
    }

    /// Create a builder for `avatar_key`.
    ///
    /// With `safe_url_mode` the key is URL-encoded when the request URL is
    /// rendered. Without it the key must already consist of unreserved URL
    /// characters.
    pub fn with_safe_url_mode(
        avatar_key: impl Into<String>,
        safe_url_mode: bool,
    ) -> RoboHashResult<Self> {
        let avatar_key = avatar_key.into();
        if avatar_key.trim().is_empty() {
            return Err(RoboHashError::BlankAvatarKey);
        }
        if !safe_url_mode && !is_valid_url_chars(&avatar_key) {
            return Err(RoboHashError::UnsafeAvatarKey { key: avatar_key });
        }

        Ok(Self {
            avatar_key,
            image_sets: vec![ImageSet::Any],
            background_set: BackgroundSet::Any,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            use_gravatar: UseGravatar::No,
            ignore_extension: true,
            image_extension: ImageExtension::Png,
            safe_url_mode,
        })
    }

    // ------------------------------------------------------------------
    // Image sets
    // ------------------------------------------------------------------

    /// Allow `image_set` for this request.
    ///
    /// Adding [`ImageSet::Any`] discards every concrete set; adding a
    /// concrete set discards `Any`.
    pub fn add_image_set(&mut self, image_set: ImageSet) -> &mut Self {
        if image_set == ImageSet::Any {
            self.image_sets = vec![ImageSet::Any];
        } else {
            self.image_sets.retain(|set| *set != ImageSet::Any);
            if !self.image_sets.contains(&image_set) {
                self.image_sets.push(image_set);
            }
        }
        self
    }

    /// Stop allowing `image_set`; the selection falls back to `Any` when emptied.
    pub fn remove_image_set(&mut self, image_set: ImageSet) -> &mut Self {
        self.image_sets.retain(|set| *set != image_set);
        self.ensure_image_sets();
        self
    }

    /// Allow each of `image_sets`, in order.
    pub fn add_image_sets<I>(&mut self, image_sets: I) -> RoboHashResult<&mut Self>
    where
        I: IntoIterator<Item = ImageSet>,
    {
        let image_sets = non_empty(image_sets)?;
        for set in image_sets {
            self.add_image_set(set);
        }
        Ok(self)
    }

    /// Stop allowing each of `image_sets`.
    pub fn remove_image_sets<I>(&mut self, image_sets: I) -> RoboHashResult<&mut Self>
    where
        I: IntoIterator<Item = ImageSet>,
    {
        let image_sets = non_empty(image_sets)?;
        self.image_sets.retain(|set| !image_sets.contains(set));
        self.ensure_image_sets();
        Ok(self)
    }

    /// Replace the selection with `image_sets`.
    pub fn set_image_sets<I>(&mut self, image_sets: I) -> RoboHashResult<&mut Self>
    where
        I: IntoIterator<Item = ImageSet>,
    {
        let image_sets = non_empty(image_sets)?;
        self.image_sets.clear();
        for set in image_sets {
            self.add_image_set(set);
        }
        Ok(self)
    }

    /// Restore the default selection, [`ImageSet::Any`].
    pub fn reset_image_sets(&mut self) -> &mut Self {
        self.image_sets = vec![ImageSet::Any];
        self
    }

    /// Remove every concrete set; equivalent to [`Self::reset_image_sets`].
    pub fn clear_image_sets(&mut self) -> &mut Self {
        self.reset_image_sets()
    }

    fn ensure_image_sets(&mut self) {
        if self.image_sets.is_empty() {
            self.image_sets.push(ImageSet::Any);
        }
    }

    // ------------------------------------------------------------------
    // Remaining options
    // ------------------------------------------------------------------

    /// Set the background set.
    pub fn set_background_set(&mut self, background_set: BackgroundSet) -> &mut Self {
        self.background_set = background_set;
        self
    }

    /// Restore the default background set, [`BackgroundSet::Any`].
    pub fn reset_background_set(&mut self) -> &mut Self {
        self.background_set = BackgroundSet::Any;
        self
    }

    /// Set the extension RoboHash should render.
    pub fn set_image_extension(&mut self, image_extension: ImageExtension) -> &mut Self {
        self.image_extension = image_extension;
        self
    }

    /// Restore the default extension, [`ImageExtension::Png`].
    pub fn reset_image_extension(&mut self) -> &mut Self {
        self.image_extension = ImageExtension::Png;
        self
    }

    /// Whether the extension is left out of the avatar hash.
    ///
    /// When true, `alive.png` and `alive.bmp` render the same robot.
    pub fn set_ignore_extension(&mut self, ignore_extension: bool) -> &mut Self {
        self.ignore_extension = ignore_extension;
        self
    }

    /// Restore the default of ignoring the extension.
    pub fn reset_ignore_extension(&mut self) -> &mut Self {
        self.ignore_extension = true;
        self
    }

    /// Set the Gravatar mode.
    pub fn set_use_gravatar(&mut self, use_gravatar: UseGravatar) -> &mut Self {
        self.use_gravatar = use_gravatar;
        self
    }

    /// Restore the default Gravatar mode, [`UseGravatar::No`].
    pub fn reset_use_gravatar(&mut self) -> &mut Self {
        self.use_gravatar = UseGravatar::No;
        self
    }

    /// Set the width in pixels.
    pub fn set_width(&mut self, width: u32) -> RoboHashResult<&mut Self> {
        self.width = checked_dimension("width", width)?;
        Ok(self)
    }

    /// Restore [`DEFAULT_WIDTH`].
    pub fn reset_width(&mut self) -> &mut Self {
        self.width = DEFAULT_WIDTH;
        self
    }

    /// Set the height in pixels.
    pub fn set_height(&mut self, height: u32) -> RoboHashResult<&mut Self> {
        self.height = checked_dimension("height", height)?;
        Ok(self)
    }

    /// Restore [`DEFAULT_HEIGHT`].
    pub fn reset_height(&mut self) -> &mut Self {
        self.height = DEFAULT_HEIGHT;
        self
    }

    /// Set both dimensions. Neither is changed if either is invalid.
    pub fn set_size(&mut self, width: u32, height: u32) -> RoboHashResult<&mut Self> {
        let width = checked_dimension("width", width)?;
        let height = checked_dimension("height", height)?;
        self.width = width;
        self.height = height;
        Ok(self)
    }

    /// Restore both default dimensions.
    pub fn reset_size(&mut self) -> &mut Self {
        self.reset_width().reset_height()
    }

    /// URL-encode the key when rendering the request URL.
    pub fn enable_safe_url_mode(&mut self) -> &mut Self {
        self.safe_url_mode = true;
        self
    }

    /// Use the key verbatim when rendering the request URL.
    ///
    /// Fails if the key contains characters that would need encoding.
    pub fn disable_safe_url_mode(&mut self) -> RoboHashResult<&mut Self> {
        if !is_valid_url_chars(&self.avatar_key) {
            return Err(RoboHashError::UnsafeAvatarKey {
                key: self.avatar_key.clone(),
            });
        }
        self.safe_url_mode = false;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn avatar_key(&self) -> &str {
        &self.avatar_key
    }

    pub fn image_sets(&self) -> &[ImageSet] {
        &self.image_sets
    }

    pub const fn background_set(&self) -> BackgroundSet {
        self.background_set
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn use_gravatar(&self) -> UseGravatar {
        self.use_gravatar
    }

    pub const fn should_ignore_extension(&self) -> bool {
        self.ignore_extension
    }

    pub const fn image_extension(&self) -> ImageExtension {
        self.image_extension
    }

    pub const fn is_safe_url_mode(&self) -> bool {
        self.safe_url_mode
    }

    /// Render the request URL against `https://robohash.org/`.
    pub fn build_request_url(&self) -> String {
        render_request_url(DEFAULT_BASE_URL, self)
    }
}

impl fmt::Display for RoboHashRequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets = self
            .image_sets
            .iter()
            .map(constant_name)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "RoboHashRequestBuilder{{avatar_key=\"{}\", image_sets=[{sets}], background_set={}, \
             width={}, height={}, use_gravatar={}, ignore_extension={}, image_extension={}, \
             safe_url_mode={}}}",
            self.avatar_key,
            constant_name(&self.background_set),
            self.width,
            self.height,
            constant_name(&self.use_gravatar),
            self.ignore_extension,
            constant_name(&self.image_extension),
            self.safe_url_mode,
        )
    }
}

/// Upper-case constant name of an option variant: `SexyRobots` becomes `SEXY_ROBOTS`.
fn constant_name<T: fmt::Debug>(value: &T) -> String {
    let variant = format!("{value:?}");
    let mut name = String::with_capacity(variant.len() + 4);
    for (i, c) in variant.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            name.push('_');
        }
        name.push(c.to_ascii_uppercase());
    }
    name
}

fn non_empty<I>(image_sets: I) -> RoboHashResult<Vec<ImageSet>>
where
    I: IntoIterator<Item = ImageSet>,
{
    let image_sets: Vec<ImageSet> = image_sets.into_iter().collect();
    if image_sets.is_empty() {
        return Err(RoboHashError::EmptyImageSets);
    }
    Ok(image_sets)
}

fn checked_dimension(dimension: &'static str, value: u32) -> RoboHashResult<u32> {
    if value == 0 {
        return Err(RoboHashError::InvalidDimension { dimension });
    }
    Ok(value)
}
