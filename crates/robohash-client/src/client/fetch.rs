//! Avatar download.

use crate::error::{RoboHashError, RoboHashResult};
use crate::http::HttpBackend;
use crate::image::RoboHashImage;
use crate::request::RoboHashRequestBuilder;

use super::RoboHashClient;

impl<B: HttpBackend> RoboHashClient<B> {
    /// Download the avatar described by `builder`.
    ///
    /// Fails with [`RoboHashError::UnexpectedContent`] when the body is
    /// neither a recognised image nor declared as `image/*`.
    pub async fn fetch_image(
        &self,
        builder: &RoboHashRequestBuilder,
    ) -> RoboHashResult<RoboHashImage> {
        let url = self.build_request_url(builder)?;
        tracing::debug!(%url, key = builder.avatar_key(), "Fetching RoboHash avatar");

        let body = self.backend.get_bytes(&url).await?;
        let image = RoboHashImage::from_bytes(url.as_str(), body.bytes, body.content_type);

        if !image.looks_like_image() {
            return Err(RoboHashError::UnexpectedContent {
                url: url.to_string(),
                content_type: image
                    .content_type()
                    .unwrap_or("unknown content")
                    .to_string(),
            });
        }

        let requested = builder.image_extension();
        if let Some(format) = image.format() {
            if !format.matches_extension(requested) {
                tracing::warn!(
                    %url,
                    %format,
                    requested = %requested,
                    "RoboHash served a different format than requested"
                );
            }
        }

        tracing::debug!(
            %url,
            bytes = image.len(),
            dimensions = ?image.dimensions(),
            "Fetched RoboHash avatar"
        );
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_client;
    use crate::config::RoboHashClientConfig;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::http::{HttpBody, MockHttpBackend};
    use crate::image::{ImageFormat, samples};
    use crate::options::{ImageExtension, ImageSet};

    #[tokio::test]
    async fn test_fetch_image_png() {
        let backend = FakeBackend::new().with_response(
            "robot.png",
            CannedResponse::ok(samples::png(300, 300), "image/png"),
        );
        let client = fake_client(backend);
        let builder = RoboHashRequestBuilder::new("robot").unwrap();

        let image = client.fetch_image(&builder).await.unwrap();

        assert_eq!(image.format(), Some(ImageFormat::Png));
        assert_eq!(image.dimensions(), Some((300, 300)));
        assert_eq!(
            image.url(),
            "https://robohash.org/robot.png?set=any&bgset=any&size=300x300"
        );
    }

    #[tokio::test]
    async fn test_fetch_image_rejects_html() {
        let backend = FakeBackend::new().with_default(CannedResponse::ok(
            b"<html>maintenance</html>".to_vec(),
            "text/html",
        ));
        let client = fake_client(backend);
        let builder = RoboHashRequestBuilder::new("robot").unwrap();

        let result = client.fetch_image(&builder).await;
        assert!(matches!(
            result,
            Err(RoboHashError::UnexpectedContent { ref content_type, .. }) if content_type == "text/html"
        ));
    }

    #[tokio::test]
    async fn test_fetch_image_propagates_http_errors() {
        let backend = FakeBackend::new().with_default(CannedResponse::status(500));
        let client = fake_client(backend);
        let builder = RoboHashRequestBuilder::new("robot").unwrap();

        let result = client.fetch_image(&builder).await;
        assert!(matches!(
            result,
            Err(RoboHashError::RequestFailed { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_image_requests_rendered_url() {
        let mut backend = MockHttpBackend::new();
        backend
            .expect_get_bytes()
            .withf(|url| {
                url.as_str() == "https://robohash.org/kit.jpg?sets=4,1&bgset=any&size=64x64"
            })
            .times(1)
            .returning(|_| {
                Ok(HttpBody {
                    bytes: samples::jpeg(64, 64),
                    content_type: Some("image/jpeg".to_string()),
                })
            });

        let client = RoboHashClient::with_backend(&RoboHashClientConfig::default(), backend).unwrap();
        let mut builder = RoboHashRequestBuilder::new("kit").unwrap();
        builder
            .add_image_sets([ImageSet::Kittens, ImageSet::Default])
            .unwrap()
            .set_image_extension(ImageExtension::Jpg)
            .set_size(64, 64)
            .unwrap();

        let image = client.fetch_image(&builder).await.unwrap();
        assert_eq!(image.format(), Some(ImageFormat::Jpeg));
        assert_eq!(image.width(), Some(64));
    }
}
