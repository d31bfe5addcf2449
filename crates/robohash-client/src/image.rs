//! Downloaded avatar images.
//!
//! Bytes are kept exactly as RoboHash served them. The format and pixel
//! dimensions are read from the file header, which is enough to confirm the
//! response really is an image without decoding it.

use std::fmt;

use crate::options::ImageExtension;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SOI: &[u8] = &[0xFF, 0xD8, 0xFF];
const BMP_SIGNATURE: &[u8] = b"BM";

/// Image container formats RoboHash can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
}

impl ImageFormat {
    /// Identify the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PNG_SIGNATURE) {
            Some(Self::Png)
        } else if bytes.starts_with(JPEG_SOI) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(BMP_SIGNATURE) {
            Some(Self::Bmp)
        } else {
            None
        }
    }

    /// Whether files of this format are what `extension` asks for.
    pub const fn matches_extension(self, extension: ImageExtension) -> bool {
        matches!(
            (self, extension),
            (Self::Png, ImageExtension::Png)
                | (Self::Jpeg, ImageExtension::Jpg | ImageExtension::Jpeg)
                | (Self::Bmp, ImageExtension::Bitmap)
        )
    }

    /// The MIME type for this format.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Bmp => "image/bmp",
        }
    }

    /// Read `(width, height)` from the header, if it is well formed.
    pub fn dimensions(self, bytes: &[u8]) -> Option<(u32, u32)> {
        match self {
            Self::Png => png_dimensions(bytes),
            Self::Jpeg => jpeg_dimensions(bytes),
            Self::Bmp => bmp_dimensions(bytes),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Bmp => "BMP",
        })
    }
}

/// An avatar downloaded from RoboHash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoboHashImage {
    url: String,
    bytes: Vec<u8>,
    content_type: Option<String>,
    format: Option<ImageFormat>,
    dimensions: Option<(u32, u32)>,
}

impl RoboHashImage {
    /// Wrap a response body, sniffing its format and dimensions.
    ///
    /// A missing content type is filled in from the sniffed format.
    pub fn from_bytes(
        url: impl Into<String>,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Self {
        let format = ImageFormat::sniff(&bytes);
        let dimensions = format.and_then(|f| f.dimensions(&bytes));
        let content_type = content_type.or_else(|| format.map(|f| f.mime_type().to_string()));
        Self {
            url: url.into(),
            bytes,
            content_type,
            format,
            dimensions,
        }
    }

    /// Whether the body is plausibly an image: a recognised header or an
    /// `image/*` content type.
    pub fn looks_like_image(&self) -> bool {
        self.format.is_some()
            || self
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub const fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub const fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn width(&self) -> Option<u32> {
        self.dimensions.map(|(w, _)| w)
    }

    pub fn height(&self) -> Option<u32> {
        self.dimensions.map(|(_, h)| h)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn be_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let raw: [u8; 4] = bytes.get(at..at + 4)?.try_into().ok()?;
    Some(u32::from_be_bytes(raw))
}

fn be_u16(bytes: &[u8], at: usize) -> Option<u16> {
    let raw: [u8; 2] = bytes.get(at..at + 2)?.try_into().ok()?;
    Some(u16::from_be_bytes(raw))
}

fn le_i32(bytes: &[u8], at: usize) -> Option<i32> {
    let raw: [u8; 4] = bytes.get(at..at + 4)?.try_into().ok()?;
    Some(i32::from_le_bytes(raw))
}

/// IHDR is always the first chunk: width and height follow the chunk type.
fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.get(12..16)? != b"IHDR" {
        return None;
    }
    Some((be_u32(bytes, 16)?, be_u32(bytes, 20)?))
}

/// BITMAPINFOHEADER width/height; height is negative for top-down bitmaps.
fn bmp_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    let width = le_i32(bytes, 18)?;
    let height = le_i32(bytes, 22)?;
    Some((width.unsigned_abs(), height.unsigned_abs()))
}

/// Walk the marker segments until a start-of-frame marker.
fn jpeg_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    let mut pos = 2;
    loop {
        // Skip fill bytes before the marker code.
        while *bytes.get(pos)? == 0xFF && *bytes.get(pos + 1)? == 0xFF {
            pos += 1;
        }
        if *bytes.get(pos)? != 0xFF {
            return None;
        }
        let marker = *bytes.get(pos + 1)?;
        match marker {
            // Standalone markers carry no length.
            0x01 | 0xD0..=0xD7 => {
                pos += 2;
                continue;
            }
            // End of image or start of scan before any frame header.
            0xD9 | 0xDA => return None,
            _ => {}
        }

        let length = usize::from(be_u16(bytes, pos + 2)?);
        let is_sof = matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            let height = be_u16(bytes, pos + 5)?;
            let width = be_u16(bytes, pos + 7)?;
            return Some((u32::from(width), u32::from(height)));
        }
        pos += 2 + length;
    }
}
