// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use vision::{Feature, Image};

#[derive(Debug, Parser)]
#[command(name = "vision-annotate")]
#[command(about = "Annotate an image using a remote image annotator service")]
pub struct Cli {
    #[arg(short = 'a')]
    #[arg(long = "server-address")]
    #[arg(help = "The server address in the format <socket-type>://<address> \
                  [default: $VISION_RPC_ADDRESS or unix:///tmp/vision-annotator.sock]")]
    pub server_address: Option<String>,

    #[arg(short = 'f')]
    #[arg(long = "feature")]
    #[arg(help = "Detector to run, as KIND[:MAX_RESULTS] (e.g. FACE_DETECTION:3)")]
    #[arg(default_value = "LABEL_DETECTION:10")]
    pub features: Vec<Feature>,

    #[arg(help = "A storage URI (gs://...) or a local image file")]
    pub image: String,
}

impl Cli {
    pub fn image(&self) -> vision::Result<Image> {
        if self.image.contains("://") {
            Ok(Image::from_source_uri(self.image.as_str()))
        } else {
            Image::from_file(&self.image)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vision::FeatureType;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["vision-annotate", "gs://1234/34.jpg"]).unwrap();

        assert_eq!(cli.server_address, None);
        assert_eq!(
            cli.features,
            vec![Feature::new(FeatureType::LabelDetection, 10)]
        );
        assert_eq!(
            cli.image().unwrap().source_uri(),
            Some("gs://1234/34.jpg")
        );
    }

    #[test]
    fn repeated_features() {
        let cli = Cli::try_parse_from([
            "vision-annotate",
            "-a",
            "unix:///run/annotator.sock",
            "-f",
            "FACE_DETECTION:3",
            "--feature",
            "SAFE_SEARCH_DETECTION",
            "photo.jpg",
        ])
        .unwrap();

        assert_eq!(
            cli.server_address.as_deref(),
            Some("unix:///run/annotator.sock")
        );
        assert_eq!(
            cli.features,
            vec![
                Feature::new(FeatureType::FaceDetection, 3),
                Feature::new(FeatureType::SafeSearchDetection, 1),
            ]
        );
    }

    #[test]
    fn unknown_feature_is_rejected() {
        let res = Cli::try_parse_from(["vision-annotate", "-f", "COLOR_DETECTION", "a.jpg"]);
        assert!(res.is_err());
    }
}
