// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use protobuf::MessageField;
use std::{fs, path::Path};
use vision_rpc_proto::image_annotator::{Image as ProtoImage, ImageSource as ProtoImageSource};

/// An image to annotate, either as raw bytes or as a storage URI
/// (e.g. `gs://bucket/object.jpg`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    content: Option<Vec<u8>>,
    source_uri: Option<String>,
}

impl Image {
    /// Create an image from optional content and an optional URI.
    ///
    /// Setting both is rejected. Setting neither is allowed here but the
    /// image cannot be sent until one of them is present.
    pub fn new(content: Option<Vec<u8>>, source_uri: Option<String>) -> Result<Self> {
        if content.is_some() && source_uri.is_some() {
            return Err(Error::InvalidArgument(
                "Only one of content or source_uri can be set".to_string(),
            ));
        }

        Ok(Image {
            content,
            source_uri,
        })
    }

    pub fn from_content(content: impl Into<Vec<u8>>) -> Self {
        Image {
            content: Some(content.into()),
            source_uri: None,
        }
    }

    pub fn from_source_uri(source_uri: impl Into<String>) -> Self {
        Image {
            content: None,
            source_uri: Some(source_uri.into()),
        }
    }

    /// Read the image content from a local file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read(path.as_ref())?;
        debug!(
            "Loaded image {} ({} bytes)",
            path.as_ref().display(),
            content.len()
        );

        Ok(Image::from_content(content))
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    pub fn source_uri(&self) -> Option<&str> {
        self.source_uri.as_deref()
    }
}

/// Convert an `Image` into its wire message.
///
/// Content is sent base64 encoded; a URI is sent verbatim as a storage
/// reference. Content wins if both are somehow present.
pub fn to_wire_image(image: &Image) -> Result<ProtoImage> {
    if let Some(content) = image.content.as_deref() {
        return Ok(ProtoImage {
            content: STANDARD.encode(content).into_bytes(),
            ..Default::default()
        });
    }

    if let Some(uri) = image.source_uri.as_deref() {
        let source = ProtoImageSource {
            gcs_image_uri: uri.to_string(),
            ..Default::default()
        };

        return Ok(ProtoImage {
            source: MessageField::some(source),
            ..Default::default()
        });
    }

    Err(Error::InvalidArgument(
        "No image content or source found".to_string(),
    ))
}

impl TryFrom<&Image> for ProtoImage {
    type Error = Error;

    fn try_from(image: &Image) -> Result<Self> {
        to_wire_image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn content_is_base64_encoded() {
        let image = Image::from_content(&b"abc 1 2 3"[..]);
        let image_pb = to_wire_image(&image).unwrap();

        assert_eq!(image_pb.content, b"YWJjIDEgMiAz".to_vec());
        assert!(image_pb.source.is_none());
    }

    #[test]
    fn uri_is_copied_verbatim() {
        let image = Image::from_source_uri("gs://1234/34.jpg");
        let image_pb = to_wire_image(&image).unwrap();

        assert_eq!(
            image_pb.source.as_ref().map(|s| s.gcs_image_uri.as_str()),
            Some("gs://1234/34.jpg")
        );
        assert!(image_pb.content.is_empty());
    }

    #[test]
    fn empty_image_is_rejected() {
        let image = Image::default();

        assert!(matches!(
            to_wire_image(&image),
            Err(Error::InvalidArgument(_))
        ));

        let image = Image::new(None, None).unwrap();
        assert!(matches!(
            ProtoImage::try_from(&image),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn content_and_uri_together_are_rejected() {
        let res = Image::new(Some(b"abc".to_vec()), Some("gs://1234/34.jpg".to_string()));
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn image_from_file() {
        let path = std::env::temp_dir().join(format!("vision-image-{}.bin", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"abc 1 2 3").unwrap();
        drop(file);

        let image = Image::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(image.content(), Some(&b"abc 1 2 3"[..]));
        assert_eq!(image.source_uri(), None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = Image::from_file("/nonexistent/vision/image.jpg");
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
