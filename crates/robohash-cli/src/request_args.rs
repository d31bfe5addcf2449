//! Request flags shared by every subcommand.

use std::fmt;
use std::str::FromStr;

use clap::Args;
use robohash_client::{
    BackgroundSet, ImageExtension, ImageSet, RoboHashRequestBuilder, RoboHashResult, UseGravatar,
};

/// An avatar size written as `<width>x<height>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected <width>x<height>, got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid dimension '{part}': {e}"))
        };
        Ok(Self {
            width: parse(width)?,
            height: parse(height)?,
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Options describing one avatar request.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Text the avatar is generated from (a name, an e-mail, a digest...)
    pub key: String,

    /// Image set to draw from; repeat for several (monsters, kittens, set3, ...)
    #[arg(short = 's', long = "set")]
    pub sets: Vec<ImageSet>,

    /// Background set (outside, spiral, any)
    #[arg(short = 'b', long)]
    pub background: Option<BackgroundSet>,

    /// Size as <width>x<height>
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub size: Option<Size>,

    /// Width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Image extension (png, jpg, jpeg, bmp)
    #[arg(short = 'e', long)]
    pub extension: Option<ImageExtension>,

    /// Gravatar mode (yes, no, hashed)
    #[arg(short = 'g', long)]
    pub gravatar: Option<UseGravatar>,

    /// Include the extension in the avatar hash
    #[arg(long)]
    pub keep_extension: bool,

    /// Send the key verbatim instead of URL-encoding it
    #[arg(long)]
    pub unsafe_url: bool,
}

impl RequestArgs {
    /// Build a validated request from these flags.
    pub fn to_builder(&self) -> RoboHashResult<RoboHashRequestBuilder> {
        let mut builder =
            RoboHashRequestBuilder::with_safe_url_mode(self.key.as_str(), !self.unsafe_url)?;

        if !self.sets.is_empty() {
            builder.set_image_sets(self.sets.iter().copied())?;
        }
        if let Some(background) = self.background {
            builder.set_background_set(background);
        }
        if let Some(size) = self.size {
            builder.set_size(size.width, size.height)?;
        }
        if let Some(width) = self.width {
            builder.set_width(width)?;
        }
        if let Some(height) = self.height {
            builder.set_height(height)?;
        }
        if let Some(extension) = self.extension {
            builder.set_image_extension(extension);
        }
        if let Some(gravatar) = self.gravatar {
            builder.set_use_gravatar(gravatar);
        }
        builder.set_ignore_extension(!self.keep_extension);

        Ok(builder)
    }
}
