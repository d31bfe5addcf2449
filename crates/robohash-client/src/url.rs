//! Request URL construction.
//!
//! RoboHash reads everything from the path and query string, so a request is
//! rendered as `<base>/<key>.<ext>?set...&bgset...&size...[&gravatar...][&ignoreext=false]`.
//! The image-set parameter always opens the query string.

use url::Url;

use crate::error::RoboHashResult;
use crate::options::{ImageExtension, ImageSet, UrlParameter};
use crate::request::RoboHashRequestBuilder;
use crate::util::encode_url;

/// The public RoboHash endpoint.
pub const DEFAULT_BASE_URL: &str = "https://robohash.org/";

/// Separator between width and height in the `size` parameter.
const WIDTH_HEIGHT_SEPARATOR: char = 'x';

/// Render the request URL for `builder` against `base`.
pub fn render_request_url(base: &str, builder: &RoboHashRequestBuilder) -> String {
    let mut url = String::from(base.trim_end_matches('/'));
    url.push('/');
    url.push_str(&avatar_path(builder));
    url.push_str(&image_sets_parameter(builder.image_sets()));
    url.push_str(&builder.background_set().construct_url_parameter(false));
    url.push_str(&size_parameter(builder));
    url.push_str(&builder.use_gravatar().construct_url_parameter(false));
    if !builder.should_ignore_extension() {
        url.push_str(&UrlParameter::IgnoreExtension.encode_trailing("false"));
    }
    url
}

/// Render and parse the request URL for `builder` against `base`.
pub fn build_request_url(base: &Url, builder: &RoboHashRequestBuilder) -> RoboHashResult<Url> {
    Ok(Url::parse(&render_request_url(base.as_str(), builder))?)
}

/// The key, encoded when safe URL mode is on, carrying the requested extension.
///
/// Only a trailing image extension on the key is replaced. Any other period
/// belongs to the key (`john.doe`, `alice@example.com`) and is kept.
fn avatar_path(builder: &RoboHashRequestBuilder) -> String {
    let key = if builder.is_safe_url_mode() {
        encode_url(builder.avatar_key())
    } else {
        builder.avatar_key().to_string()
    };
    let extension = builder.image_extension();
    if ImageExtension::has_image_extension(&key) {
        extension.set_as_image_extension(&key)
    } else {
        extension.add_as_suffix(&key)
    }
}

fn image_sets_parameter(image_sets: &[ImageSet]) -> String {
    match image_sets {
        [] => ImageSet::Any.construct_url_parameter(true),
        sets if sets.contains(&ImageSet::Any) => ImageSet::Any.construct_url_parameter(true),
        [single] => single.construct_url_parameter(true),
        sets => {
            let list = sets
                .iter()
                .filter_map(|set| set.list_url_parameter_name().ok())
                .collect::<Vec<_>>()
                .join(",");
            UrlParameter::ImageSets.encode(&list, true)
        }
    }
}

fn size_parameter(builder: &RoboHashRequestBuilder) -> String {
    let value = format!(
        "{}{WIDTH_HEIGHT_SEPARATOR}{}",
        builder.width(),
        builder.height()
    );
    UrlParameter::Size.encode_trailing(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BackgroundSet, UseGravatar};

    fn builder(key: &str) -> RoboHashRequestBuilder {
        RoboHashRequestBuilder::new(key).unwrap()
    }

    #[test]
    fn test_minimal_request() {
        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &builder("minimal")),
            "https://robohash.org/minimal.png?set=any&bgset=any&size=300x300"
        );
    }

    #[test]
    fn test_gravatar_and_ignoreext() {
        let mut request = builder("2bf1b7a19bcad06a8e894d7373a4cfc7");
        request
            .add_image_set(ImageSet::Humans)
            .set_background_set(BackgroundSet::SpiralAndPatterns)
            .set_use_gravatar(UseGravatar::Hashed)
            .set_image_extension(ImageExtension::Jpeg)
            .set_size(500, 500)
            .unwrap();

        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &request),
            "https://robohash.org/2bf1b7a19bcad06a8e894d7373a4cfc7.jpeg\
             ?set=set5&bgset=bg2&size=500x500&gravatar=hashed"
        );

        request.set_ignore_extension(false);
        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &request),
            "https://robohash.org/2bf1b7a19bcad06a8e894d7373a4cfc7.jpeg\
             ?set=set5&bgset=bg2&size=500x500&gravatar=hashed&ignoreext=false"
        );
    }

    #[test]
    fn test_multiple_sets_use_list_parameter() {
        let mut request = builder("nathan-v-cheshire");
        request
            .add_image_set(ImageSet::Monsters)
            .add_image_set(ImageSet::Humans)
            .set_background_set(BackgroundSet::SpiralAndPatterns)
            .set_size(701, 701)
            .unwrap();

        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &request),
            "https://robohash.org/nathan-v-cheshire.png?sets=2,5&bgset=bg2&size=701x701"
        );
    }

    #[test]
    fn test_safe_mode_encodes_key() {
        let request = builder("other key");
        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &request),
            "https://robohash.org/other+key.png?set=any&bgset=any&size=300x300"
        );
    }

    #[test]
    fn test_dotted_keys_stay_distinct() {
        let doe = render_request_url(DEFAULT_BASE_URL, &builder("john.doe"));
        let smith = render_request_url(DEFAULT_BASE_URL, &builder("john.smith"));
        assert_ne!(doe, smith);
        assert_eq!(
            doe,
            "https://robohash.org/john.doe.png?set=any&bgset=any&size=300x300"
        );
    }

    #[test]
    fn test_email_key_keeps_domain() {
        let mut request = builder("alice@example.com");
        request.set_use_gravatar(UseGravatar::Yes);
        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &request),
            "https://robohash.org/alice%40example.com.png\
             ?set=any&bgset=any&size=300x300&gravatar=yes"
        );
    }

    #[test]
    fn test_trailing_image_extension_is_replaced() {
        let mut request = builder("robot.jpg");
        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &request),
            "https://robohash.org/robot.png?set=any&bgset=any&size=300x300"
        );

        request.set_image_extension(ImageExtension::Jpg);
        assert_eq!(
            render_request_url(DEFAULT_BASE_URL, &request),
            "https://robohash.org/robot.jpg?set=any&bgset=any&size=300x300"
        );
    }

    #[test]
    fn test_custom_base_with_or_without_trailing_slash() {
        let request = builder("abc");
        assert_eq!(
            render_request_url("http://localhost:8080", &request),
            "http://localhost:8080/abc.png?set=any&bgset=any&size=300x300"
        );
        assert_eq!(
            render_request_url("http://localhost:8080/", &request),
            "http://localhost:8080/abc.png?set=any&bgset=any&size=300x300"
        );
    }

    #[test]
    fn test_build_request_url_parses() {
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();
        let url = build_request_url(&base, &builder("parsed")).unwrap();
        assert_eq!(url.host_str(), Some("robohash.org"));
        assert_eq!(url.path(), "/parsed.png");
        assert_eq!(url.query(), Some("set=any&bgset=any&size=300x300"));
    }
}
