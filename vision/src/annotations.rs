// SPDX-License-Identifier: Apache-2.0

use crate::{
    color::ImagePropertiesAnnotation, entity::EntityAnnotation, face::Face,
    safe_search::SafeSearchAnnotation,
};
use vision_rpc_proto::image_annotator::{
    AnnotateImageResponse, EntityAnnotation as ProtoEntityAnnotation,
};

/// Everything the service detected in one image.
///
/// Detectors that were not requested, or found nothing, leave their part
/// empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    pub faces: Vec<Face>,
    pub properties: Option<ImagePropertiesAnnotation>,
    pub labels: Vec<EntityAnnotation>,
    pub landmarks: Vec<EntityAnnotation>,
    pub logos: Vec<EntityAnnotation>,
    pub safe_searches: Option<SafeSearchAnnotation>,
    pub texts: Vec<EntityAnnotation>,
    /// Failure the service reported for this image, if any. Detections
    /// that did succeed are still filled in.
    pub error: Option<ImageError>,
}

/// Per-image error status sent back alongside (possibly partial) results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageError {
    pub code: i32,
    pub message: String,
}

impl Annotations {
    /// Build `Annotations` from a single image response.
    pub fn from_pb(response: &AnnotateImageResponse) -> Self {
        Annotations {
            faces: response.face_annotations.iter().map(Face::from).collect(),
            properties: response
                .image_properties_annotation
                .as_ref()
                .map(ImagePropertiesAnnotation::from),
            labels: entities(&response.label_annotations),
            landmarks: entities(&response.landmark_annotations),
            logos: entities(&response.logo_annotations),
            safe_searches: response
                .safe_search_annotation
                .as_ref()
                .map(SafeSearchAnnotation::from),
            texts: entities(&response.text_annotations),
            error: response
                .error
                .as_ref()
                .filter(|status| status.code != 0)
                .map(|status| ImageError {
                    code: status.code,
                    message: status.message.clone(),
                }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
            && self.properties.is_none()
            && self.labels.is_empty()
            && self.landmarks.is_empty()
            && self.logos.is_empty()
            && self.safe_searches.is_none()
            && self.texts.is_empty()
    }
}

impl From<&AnnotateImageResponse> for Annotations {
    fn from(response: &AnnotateImageResponse) -> Self {
        Annotations::from_pb(response)
    }
}

fn entities(annotations: &[ProtoEntityAnnotation]) -> Vec<EntityAnnotation> {
    annotations.iter().map(EntityAnnotation::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{Bounds, LocationInformation, Vertex},
        likelihood::Likelihood,
    };
    use protobuf::MessageField;
    use vision_rpc_proto::image_annotator::{
        BoundingPoly, Color, ColorInfo, DominantColorsAnnotation, FaceAnnotation, ImageProperties,
        LatLng, Likelihood as ProtoLikelihood, LocationInfo,
        SafeSearchAnnotation as ProtoSafeSearchAnnotation, Status, Vertex as ProtoVertex,
    };

    fn poly(points: &[(i32, i32)]) -> BoundingPoly {
        BoundingPoly {
            vertices: points
                .iter()
                .map(|&(x, y)| ProtoVertex {
                    x,
                    y,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn entity(description: &str, score: f32) -> ProtoEntityAnnotation {
        ProtoEntityAnnotation {
            mid: "/m/0k4j".to_string(),
            description: description.to_string(),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn empty_response() {
        let annotations = Annotations::from_pb(&AnnotateImageResponse::new());

        assert!(annotations.is_empty());
        assert_eq!(annotations, Annotations::default());
    }

    #[test]
    fn labels_and_landmarks() {
        let mut landmark = entity("Mount Rushmore", 0.9);
        landmark.bounding_poly = MessageField::some(poly(&[(1, 2), (3, 4)]));
        landmark.locations.push(LocationInfo {
            lat_lng: MessageField::some(LatLng {
                latitude: 43.88,
                longitude: -103.46,
                ..Default::default()
            }),
            ..Default::default()
        });

        let response = AnnotateImageResponse {
            label_annotations: vec![entity("car", 0.75), entity("wheel", 0.5)],
            landmark_annotations: vec![landmark],
            ..Default::default()
        };

        let annotations = Annotations::from_pb(&response);

        assert_eq!(annotations.labels.len(), 2);
        assert_eq!(annotations.labels[0].description, "car");
        assert_eq!(annotations.labels[0].mid, "/m/0k4j");
        assert_eq!(annotations.labels[1].score, 0.5);
        assert_eq!(annotations.labels[0].bounds, None);

        let landmark = &annotations.landmarks[0];
        assert_eq!(
            landmark.bounds,
            Some(Bounds {
                vertices: vec![Vertex { x: 1, y: 2 }, Vertex { x: 3, y: 4 }]
            })
        );
        assert_eq!(
            landmark.locations,
            vec![LocationInformation {
                latitude: 43.88,
                longitude: -103.46
            }]
        );
        assert!(annotations.logos.is_empty());
        assert!(annotations.texts.is_empty());
    }

    #[test]
    fn faces() {
        let face = FaceAnnotation {
            bounding_poly: MessageField::some(poly(&[(0, 0), (10, 10)])),
            roll_angle: -1.5,
            pan_angle: 2.0,
            tilt_angle: 0.25,
            detection_confidence: 0.98,
            joy_likelihood: ProtoLikelihood::VERY_LIKELY.into(),
            headwear_likelihood: ProtoLikelihood::UNLIKELY.into(),
            blurred_likelihood: ProtoLikelihood::POSSIBLE.into(),
            ..Default::default()
        };
        let response = AnnotateImageResponse {
            face_annotations: vec![face],
            ..Default::default()
        };

        let annotations = Annotations::from_pb(&response);
        let face = &annotations.faces[0];

        assert_eq!(face.angles.roll, -1.5);
        assert_eq!(face.angles.pan, 2.0);
        assert_eq!(face.detection_confidence, 0.98);
        assert_eq!(face.emotions.joy, Likelihood::VeryLikely);
        assert_eq!(face.emotions.anger, Likelihood::Unknown);
        assert_eq!(face.headwear, Likelihood::Unlikely);
        assert_eq!(face.image_properties.blurred, Likelihood::Possible);
        assert!(face.fd_bounds.is_none());
    }

    #[test]
    fn safe_search_and_properties() {
        let response = AnnotateImageResponse {
            safe_search_annotation: MessageField::some(ProtoSafeSearchAnnotation {
                adult: ProtoLikelihood::VERY_UNLIKELY.into(),
                violence: ProtoLikelihood::LIKELY.into(),
                ..Default::default()
            }),
            image_properties_annotation: MessageField::some(ImageProperties {
                dominant_colors: MessageField::some(DominantColorsAnnotation {
                    colors: vec![ColorInfo {
                        color: MessageField::some(Color {
                            red: 253.0,
                            green: 203.0,
                            blue: 65.0,
                            ..Default::default()
                        }),
                        score: 0.42,
                        pixel_fraction: 0.1,
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let annotations = Annotations::from_pb(&response);

        let safe_search = annotations.safe_searches.unwrap();
        assert_eq!(safe_search.adult, Likelihood::VeryUnlikely);
        assert_eq!(safe_search.violence, Likelihood::Likely);
        assert_eq!(safe_search.medical, Likelihood::Unknown);

        let properties = annotations.properties.unwrap();
        assert_eq!(properties.colors.len(), 1);
        assert_eq!(properties.colors[0].color.red, 253.0);
        assert_eq!(properties.colors[0].color.alpha, 0.0);
        assert_eq!(properties.colors[0].score, 0.42);
        assert!(annotations.faces.is_empty());
    }

    #[test]
    fn error_status_is_kept_with_partial_results() {
        let response = AnnotateImageResponse {
            label_annotations: vec![entity("car", 0.75)],
            error: MessageField::some(Status {
                code: 3,
                message: "partial".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let annotations = Annotations::from_pb(&response);

        assert_eq!(annotations.labels.len(), 1);
        assert_eq!(
            annotations.error,
            Some(ImageError {
                code: 3,
                message: "partial".to_string()
            })
        );
        assert!(!annotations.is_empty());
    }

    #[test]
    fn zero_status_code_is_not_an_error() {
        let response = AnnotateImageResponse {
            error: MessageField::some(Status::new()),
            ..Default::default()
        };

        assert_eq!(Annotations::from_pb(&response).error, None);
    }
}
