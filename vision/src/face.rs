// SPDX-License-Identifier: Apache-2.0

use crate::{geometry::Bounds, likelihood::Likelihood};
use vision_rpc_proto::image_annotator::FaceAnnotation as ProtoFaceAnnotation;

/// Head pose in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Angles {
    pub roll: f32,
    pub pan: f32,
    pub tilt: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emotions {
    pub joy: Likelihood,
    pub sorrow: Likelihood,
    pub surprise: Likelihood,
    pub anger: Likelihood,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceImageProperties {
    pub blurred: Likelihood,
    pub underexposed: Likelihood,
}

/// A detected face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// Polygon around the whole head.
    pub bounds: Option<Bounds>,
    /// Tighter polygon around the skin area only.
    pub fd_bounds: Option<Bounds>,
    pub angles: Angles,
    pub detection_confidence: f32,
    pub landmarking_confidence: f32,
    pub emotions: Emotions,
    pub image_properties: FaceImageProperties,
    pub headwear: Likelihood,
}

impl From<&ProtoFaceAnnotation> for Face {
    fn from(face: &ProtoFaceAnnotation) -> Self {
        Face {
            bounds: face.bounding_poly.as_ref().map(Bounds::from),
            fd_bounds: face.fd_bounding_poly.as_ref().map(Bounds::from),
            angles: Angles {
                roll: face.roll_angle,
                pan: face.pan_angle,
                tilt: face.tilt_angle,
            },
            detection_confidence: face.detection_confidence,
            landmarking_confidence: face.landmarking_confidence,
            emotions: Emotions {
                joy: face.joy_likelihood.into(),
                sorrow: face.sorrow_likelihood.into(),
                surprise: face.surprise_likelihood.into(),
                anger: face.anger_likelihood.into(),
            },
            image_properties: FaceImageProperties {
                blurred: face.blurred_likelihood.into(),
                underexposed: face.under_exposed_likelihood.into(),
            },
            headwear: face.headwear_likelihood.into(),
        }
    }
}
