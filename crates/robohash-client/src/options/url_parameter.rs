//! Query-string parameters understood by RoboHash.

/// The URL parameters a RoboHash request URL may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlParameter {
    /// The image extension. Carried on the avatar key, never as a parameter.
    ImageExtension,
    /// Whether RoboHash should try Gravatar first.
    UseGravatar,
    /// Whether the extension is excluded from the avatar hash.
    IgnoreExtension,
    /// A single image set.
    ImageSet,
    /// A comma separated list of image sets.
    ImageSets,
    /// The background set.
    BackgroundSet,
    /// The `<width>x<height>` size.
    Size,
}

impl UrlParameter {
    /// The parameter name as it appears in the query string, such as `bgset`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ImageExtension => "",
            Self::UseGravatar => "gravatar",
            Self::IgnoreExtension => "ignoreext",
            Self::ImageSet => "set",
            Self::ImageSets => "sets",
            Self::BackgroundSet => "bgset",
            Self::Size => "size",
        }
    }

    /// Encode `value` as `?name=value` when `first` is set, `&name=value` otherwise.
    pub fn encode(self, value: &str, first: bool) -> String {
        let prefix = if first { '?' } else { '&' };
        format!("{prefix}{}={value}", self.name())
    }

    /// Encode `value` as a non-leading parameter.
    pub fn encode_trailing(self, value: &str) -> String {
        self.encode(value, false)
    }
}
