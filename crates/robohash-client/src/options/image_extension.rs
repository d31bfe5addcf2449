use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RoboHashError;

/// The image extensions RoboHash can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageExtension {
    /// JPEG, short form.
    Jpg,
    /// JPEG, long form.
    Jpeg,
    /// PNG.
    #[default]
    Png,
    /// Windows bitmap. Noticeably slower for RoboHash to render.
    Bitmap,
}

impl ImageExtension {
    /// Every extension.
    pub const ALL: [Self; 4] = [Self::Jpg, Self::Jpeg, Self::Png, Self::Bitmap];

    /// Whether `name` ends with one of the extensions RoboHash serves.
    pub fn has_image_extension(name: &str) -> bool {
        Self::ALL
            .iter()
            .any(|extension| name.ends_with(extension.extension_with_period()))
    }

    /// The bare extension, such as `jpg`.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Bitmap => "bmp",
        }
    }

    /// The extension with a leading period, such as `.jpg`.
    pub const fn extension_with_period(self) -> &'static str {
        match self {
            Self::Jpg => ".jpg",
            Self::Jpeg => ".jpeg",
            Self::Png => ".png",
            Self::Bitmap => ".bmp",
        }
    }

    /// Append this extension to `prefix`: `my-image` becomes `my-image.png`.
    ///
    /// Blank input is not rejected: `""` becomes `.png`. Callers that need a
    /// non-blank stem check it themselves.
    pub fn add_as_suffix(self, prefix: &str) -> String {
        format!("{prefix}{}", self.extension_with_period())
    }

    /// Make this the extension of `name`.
    ///
    /// A name already carrying this extension is returned unchanged. Otherwise
    /// whatever follows the last period is replaced, or the extension is
    /// appended when there is no period past the first character. Like
    /// [`add_as_suffix`](Self::add_as_suffix), a blank name is accepted.
    pub fn set_as_image_extension(self, name: &str) -> String {
        if name.ends_with(self.extension_with_period()) {
            return name.to_string();
        }

        match name.rfind('.') {
            Some(idx) if idx > 0 => self.add_as_suffix(&name[..idx]),
            _ => self.add_as_suffix(name),
        }
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageExtension {
    type Err = RoboHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "bmp" | "bitmap" => Ok(Self::Bitmap),
            _ => Err(RoboHashError::UnknownOption {
                kind: "image extension",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(ImageExtension::Png.extension(), "png");
        assert_eq!(ImageExtension::Jpg.extension(), "jpg");
        assert_eq!(ImageExtension::Jpeg.extension(), "jpeg");
        assert_eq!(ImageExtension::Bitmap.extension(), "bmp");
    }

    #[test]
    fn test_extension_with_period() {
        assert_eq!(ImageExtension::Png.extension_with_period(), ".png");
        assert_eq!(ImageExtension::Bitmap.extension_with_period(), ".bmp");
    }

    #[test]
    fn test_add_as_suffix() {
        assert_eq!(ImageExtension::Png.add_as_suffix("my-image"), "my-image.png");
        assert_eq!(ImageExtension::Jpg.add_as_suffix("my-image"), "my-image.jpg");
        assert_eq!(ImageExtension::Jpeg.add_as_suffix("my-image"), "my-image.jpeg");
        assert_eq!(ImageExtension::Bitmap.add_as_suffix("my-image"), "my-image.bmp");
    }

    #[test]
    fn test_set_as_image_extension() {
        let png = ImageExtension::Png;
        assert_eq!(png.set_as_image_extension("my-image"), "my-image.png");
        assert_eq!(png.set_as_image_extension("my-image.jpeg"), "my-image.png");
        assert_eq!(png.set_as_image_extension("my-image.jpg"), "my-image.png");
        assert_eq!(png.set_as_image_extension("my-image.bmp"), "my-image.png");
        assert_eq!(png.set_as_image_extension("my-image.loop"), "my-image.png");
        assert_eq!(
            png.set_as_image_extension("my-image.loop.something"),
            "my-image.loop.png"
        );
        assert_eq!(
            ImageExtension::Jpeg.set_as_image_extension("my-image.png.jpeg.jpeg"),
            "my-image.png.jpeg.jpeg"
        );
    }

    #[test]
    fn test_set_as_image_extension_leading_period() {
        assert_eq!(ImageExtension::Png.set_as_image_extension(".hidden"), ".hidden.png");
    }

    #[test]
    fn test_blank_names_are_accepted() {
        assert_eq!(ImageExtension::Png.add_as_suffix(""), ".png");
        assert_eq!(ImageExtension::Png.set_as_image_extension("   "), "   .png");
    }

    #[test]
    fn test_has_image_extension() {
        assert!(ImageExtension::has_image_extension("robot.png"));
        assert!(ImageExtension::has_image_extension("robot.jpeg"));
        assert!(ImageExtension::has_image_extension("robot.bmp"));
        assert!(!ImageExtension::has_image_extension("john.doe"));
        assert!(!ImageExtension::has_image_extension("alice@example.com"));
        assert!(!ImageExtension::has_image_extension("png"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(".JPG".parse::<ImageExtension>().unwrap(), ImageExtension::Jpg);
        assert_eq!("bitmap".parse::<ImageExtension>().unwrap(), ImageExtension::Bitmap);
        assert!("gif".parse::<ImageExtension>().is_err());
    }
}
