// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Result};
use derive_more::Display;
use std::str::FromStr;
use vision_rpc_proto::image_annotator::{
    feature::Type as ProtoFeatureType, Feature as ProtoFeature,
};

/// The detectors that can be requested for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FeatureType {
    #[display("FACE_DETECTION")]
    FaceDetection,
    #[display("LANDMARK_DETECTION")]
    LandmarkDetection,
    #[display("LOGO_DETECTION")]
    LogoDetection,
    #[display("LABEL_DETECTION")]
    LabelDetection,
    #[display("TEXT_DETECTION")]
    TextDetection,
    #[display("SAFE_SEARCH_DETECTION")]
    SafeSearchDetection,
    #[display("IMAGE_PROPERTIES")]
    ImageProperties,
}

impl FeatureType {
    pub const ALL: [FeatureType; 7] = [
        FeatureType::FaceDetection,
        FeatureType::LandmarkDetection,
        FeatureType::LogoDetection,
        FeatureType::LabelDetection,
        FeatureType::TextDetection,
        FeatureType::SafeSearchDetection,
        FeatureType::ImageProperties,
    ];
}

impl From<FeatureType> for ProtoFeatureType {
    fn from(feature_type: FeatureType) -> Self {
        match feature_type {
            FeatureType::FaceDetection => ProtoFeatureType::FACE_DETECTION,
            FeatureType::LandmarkDetection => ProtoFeatureType::LANDMARK_DETECTION,
            FeatureType::LogoDetection => ProtoFeatureType::LOGO_DETECTION,
            FeatureType::LabelDetection => ProtoFeatureType::LABEL_DETECTION,
            FeatureType::TextDetection => ProtoFeatureType::TEXT_DETECTION,
            FeatureType::SafeSearchDetection => ProtoFeatureType::SAFE_SEARCH_DETECTION,
            FeatureType::ImageProperties => ProtoFeatureType::IMAGE_PROPERTIES,
        }
    }
}

impl FromStr for FeatureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FeatureType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownFeatureType(s.to_string()))
    }
}

/// A detector request: which detector to run and how many results to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    feature_type: FeatureType,
    max_results: u32,
}

impl Feature {
    pub fn new(feature_type: FeatureType, max_results: u32) -> Self {
        Feature {
            feature_type,
            max_results,
        }
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }
}

/// Parses `KIND` or `KIND:MAX_RESULTS`, e.g. `LABEL_DETECTION:5`.
///
/// A missing count defaults to a single result.
impl FromStr for Feature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(2, ':');
        let feature_type = parts.next().unwrap_or_default().parse::<FeatureType>()?;
        let max_results = match parts.next() {
            Some(v) => v.parse::<u32>().map_err(|_| {
                Error::InvalidArgument(format!("Invalid max results for {}: {}", feature_type, v))
            })?,
            None => 1,
        };

        Ok(Feature::new(feature_type, max_results))
    }
}

/// Convert a `Feature` into its wire message.
///
/// The wire count is an `int32`; larger values saturate.
pub fn to_wire_feature(feature: &Feature) -> ProtoFeature {
    ProtoFeature {
        type_: ProtoFeatureType::from(feature.feature_type).into(),
        max_results: i32::try_from(feature.max_results).unwrap_or(i32::MAX),
        ..Default::default()
    }
}

impl From<&Feature> for ProtoFeature {
    fn from(feature: &Feature) -> Self {
        to_wire_feature(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protobuf::Enum;

    #[test]
    fn label_detection_maps_to_wire_value() {
        let feature = Feature::new(FeatureType::LabelDetection, 5);
        let feature_pb = to_wire_feature(&feature);

        assert_eq!(feature_pb.type_.value(), 4);
        assert_eq!(feature_pb.max_results, 5);
    }

    #[test]
    fn every_type_has_a_distinct_wire_value() {
        let values: Vec<i32> = FeatureType::ALL
            .into_iter()
            .map(|t| ProtoFeatureType::from(t).value())
            .collect();

        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn max_results_is_copied() {
        for max in [0, 1, 10, 1000] {
            let feature_pb = to_wire_feature(&Feature::new(FeatureType::TextDetection, max));
            assert_eq!(feature_pb.max_results, max as i32);
        }

        let feature_pb = to_wire_feature(&Feature::new(FeatureType::TextDetection, u32::MAX));
        assert_eq!(feature_pb.max_results, i32::MAX);
    }

    #[test]
    fn parse_feature_type_names() {
        assert_eq!(
            "LABEL_DETECTION".parse::<FeatureType>().unwrap(),
            FeatureType::LabelDetection
        );
        assert_eq!(
            "safe_search_detection".parse::<FeatureType>().unwrap(),
            FeatureType::SafeSearchDetection
        );
        assert!(matches!(
            "COLOR_DETECTION".parse::<FeatureType>(),
            Err(Error::UnknownFeatureType(_))
        ));
    }

    #[test]
    fn parse_feature_with_count() {
        let feature: Feature = "LOGO_DETECTION:3".parse().unwrap();
        assert_eq!(feature, Feature::new(FeatureType::LogoDetection, 3));

        let feature: Feature = "FACE_DETECTION".parse().unwrap();
        assert_eq!(feature, Feature::new(FeatureType::FaceDetection, 1));

        assert!(matches!(
            "LOGO_DETECTION:many".parse::<Feature>(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
