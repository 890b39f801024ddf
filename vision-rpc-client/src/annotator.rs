// SPDX-License-Identifier: Apache-2.0

use crate::{stub::AnnotatorStub, Error, Result, VisionRpcClient};
use log::debug;
use protobuf::MessageField;
use vision::{
    color::ImagePropertiesAnnotation, to_wire_feature, to_wire_image, Annotations,
    EntityAnnotation, Face, Feature, FeatureType, Image, SafeSearchAnnotation,
};
use vision_rpc_proto::image_annotator::{AnnotateImageRequest, BatchAnnotateImagesRequest};

/// Result limit used by the `detect_*` helpers.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Annotates one image per call through an [`AnnotatorStub`].
pub struct VisionAnnotator<S> {
    stub: S,
}

impl VisionAnnotator<VisionRpcClient> {
    /// Connect to the service at the address in `VISION_RPC_ADDRESS`.
    pub fn from_env() -> Result<Self> {
        Ok(VisionAnnotator::new(VisionRpcClient::new()?))
    }
}

impl<S: AnnotatorStub> VisionAnnotator<S> {
    pub fn new(stub: S) -> Self {
        VisionAnnotator { stub }
    }

    pub fn stub(&self) -> &S {
        &self.stub
    }

    /// Run the requested detectors on `image`.
    ///
    /// Sends exactly one batch request holding a single image. Returns `None`
    /// if the service sent back no response for it. A per-image failure
    /// status is reported through [`Annotations::error`]. A batch answer with
    /// more than one response is rejected with [`Error::Unsupported`].
    pub fn annotate(&self, image: &Image, features: &[Feature]) -> Result<Option<Annotations>> {
        if features.is_empty() {
            return Err(Error::InvalidArgument(
                "At least one feature is required".to_string(),
            ));
        }

        let request = AnnotateImageRequest {
            image: MessageField::some(to_wire_image(image)?),
            features: features.iter().map(to_wire_feature).collect(),
            ..Default::default()
        };
        let batch = BatchAnnotateImagesRequest {
            requests: vec![request],
            ..Default::default()
        };

        debug!("Annotating image with {} feature(s)", features.len());
        let resp = self.stub.batch_annotate_images(&batch)?;

        match resp.responses.as_slice() {
            [] => Ok(None),
            [response] => Ok(Some(Annotations::from_pb(response))),
            responses => Err(Error::Unsupported(format!(
                "Multiple image responses ({}) for a single image request",
                responses.len()
            ))),
        }
    }

    fn detect(&self, image: &Image, feature_type: FeatureType, limit: u32) -> Result<Annotations> {
        Ok(self
            .annotate(image, &[Feature::new(feature_type, limit)])?
            .unwrap_or_default())
    }

    pub fn detect_faces(&self, image: &Image, limit: u32) -> Result<Vec<Face>> {
        Ok(self.detect(image, FeatureType::FaceDetection, limit)?.faces)
    }

    pub fn detect_labels(&self, image: &Image, limit: u32) -> Result<Vec<EntityAnnotation>> {
        Ok(self.detect(image, FeatureType::LabelDetection, limit)?.labels)
    }

    pub fn detect_landmarks(&self, image: &Image, limit: u32) -> Result<Vec<EntityAnnotation>> {
        Ok(self
            .detect(image, FeatureType::LandmarkDetection, limit)?
            .landmarks)
    }

    pub fn detect_logos(&self, image: &Image, limit: u32) -> Result<Vec<EntityAnnotation>> {
        Ok(self.detect(image, FeatureType::LogoDetection, limit)?.logos)
    }

    pub fn detect_text(&self, image: &Image, limit: u32) -> Result<Vec<EntityAnnotation>> {
        Ok(self.detect(image, FeatureType::TextDetection, limit)?.texts)
    }

    pub fn detect_safe_search(&self, image: &Image) -> Result<Option<SafeSearchAnnotation>> {
        Ok(self
            .detect(image, FeatureType::SafeSearchDetection, DEFAULT_MAX_RESULTS)?
            .safe_searches)
    }

    pub fn detect_properties(&self, image: &Image) -> Result<Option<ImagePropertiesAnnotation>> {
        Ok(self
            .detect(image, FeatureType::ImageProperties, DEFAULT_MAX_RESULTS)?
            .properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protobuf::Enum;
    use std::sync::Mutex;
    use vision::ImageError;
    use vision_rpc_proto::image_annotator::{
        feature::Type as ProtoFeatureType, AnnotateImageResponse, BatchAnnotateImagesResponse,
        EntityAnnotation as ProtoEntityAnnotation, Status,
    };

    /// Answers every call with the same canned result and keeps the requests.
    struct RecordingStub {
        reply: std::result::Result<Vec<AnnotateImageResponse>, String>,
        requests: Mutex<Vec<BatchAnnotateImagesRequest>>,
    }

    impl RecordingStub {
        fn replying(responses: Vec<AnnotateImageResponse>) -> Self {
            RecordingStub {
                reply: Ok(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            RecordingStub {
                reply: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> BatchAnnotateImagesRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl AnnotatorStub for RecordingStub {
        fn batch_annotate_images(
            &self,
            req: &BatchAnnotateImagesRequest,
        ) -> Result<BatchAnnotateImagesResponse> {
            self.requests.lock().unwrap().push(req.clone());

            match &self.reply {
                Ok(responses) => Ok(BatchAnnotateImagesResponse {
                    responses: responses.clone(),
                    ..Default::default()
                }),
                Err(message) => Err(Error::Ttrpc(ttrpc::Error::RpcStatus(
                    ttrpc::error::get_status(ttrpc::Code::UNAVAILABLE, message.clone()),
                ))),
            }
        }
    }

    fn label_response(description: &str) -> AnnotateImageResponse {
        AnnotateImageResponse {
            label_annotations: vec![ProtoEntityAnnotation {
                description: description.to_string(),
                score: 0.875,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn image() -> Image {
        Image::from_content(&b"abc 1 2 3"[..])
    }

    fn features() -> Vec<Feature> {
        vec![Feature::new(FeatureType::LabelDetection, 5)]
    }

    #[test]
    fn single_response_is_parsed() {
        let response = label_response("cat");
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![response.clone()]));

        let annotations = annotator.annotate(&image(), &features()).unwrap();

        assert_eq!(annotations, Some(Annotations::from_pb(&response)));
        assert_eq!(annotations.unwrap().labels[0].description, "cat");
        assert_eq!(annotator.stub().calls(), 1);
    }

    #[test]
    fn request_carries_one_converted_image() {
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![label_response("cat")]));
        let features = vec![
            Feature::new(FeatureType::LabelDetection, 5),
            Feature::new(FeatureType::TextDetection, 2),
        ];

        annotator.annotate(&image(), &features).unwrap();

        let batch = annotator.stub().last_request();
        assert_eq!(batch.requests.len(), 1);

        let request = &batch.requests[0];
        let image_pb = request.image.as_ref().unwrap();
        assert_eq!(image_pb.content, b"YWJjIDEgMiAz".to_vec());

        let types: Vec<i32> = request.features.iter().map(|f| f.type_.value()).collect();
        assert_eq!(
            types,
            vec![
                ProtoFeatureType::LABEL_DETECTION.value(),
                ProtoFeatureType::TEXT_DETECTION.value()
            ]
        );
        assert_eq!(request.features[0].max_results, 5);
        assert_eq!(request.features[1].max_results, 2);
    }

    #[test]
    fn no_responses_means_no_annotations() {
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![]));

        assert_eq!(annotator.annotate(&image(), &features()).unwrap(), None);
        assert_eq!(annotator.stub().calls(), 1);
    }

    #[test]
    fn multiple_responses_are_unsupported() {
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![
            label_response("cat"),
            label_response("dog"),
        ]));

        let res = annotator.annotate(&image(), &features());

        assert!(matches!(res, Err(Error::Unsupported(_))));
        assert_eq!(annotator.stub().calls(), 1);
    }

    #[test]
    fn empty_image_fails_before_the_call() {
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![]));

        let res = annotator.annotate(&Image::default(), &features());

        assert!(matches!(
            res,
            Err(Error::Vision(vision::Error::InvalidArgument(_)))
        ));
        assert_eq!(annotator.stub().calls(), 0);
    }

    #[test]
    fn empty_feature_list_fails_before_the_call() {
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![]));

        let res = annotator.annotate(&image(), &[]);

        assert!(matches!(res, Err(Error::InvalidArgument(_))));
        assert_eq!(annotator.stub().calls(), 0);
    }

    #[test]
    fn transport_errors_are_propagated() {
        let annotator = VisionAnnotator::new(RecordingStub::failing("service down"));

        match annotator.annotate(&image(), &features()) {
            Err(Error::Ttrpc(ttrpc::Error::RpcStatus(status))) => {
                assert_eq!(status.message, "service down");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(annotator.stub().calls(), 1);
    }

    #[test]
    fn image_error_status_is_returned_with_the_parsed_result() {
        let mut response = label_response("cat");
        response.error = MessageField::some(Status {
            code: 3,
            message: "partial".to_string(),
            ..Default::default()
        });
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![response.clone()]));

        let annotations = annotator.annotate(&image(), &features()).unwrap().unwrap();

        assert_eq!(annotations, Annotations::from_pb(&response));
        assert_eq!(annotations.labels[0].description, "cat");
        assert_eq!(
            annotations.error,
            Some(ImageError {
                code: 3,
                message: "partial".to_string()
            })
        );
    }

    #[test]
    fn zero_error_code_is_success() {
        let mut response = label_response("cat");
        response.error = MessageField::some(Status::new());
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![response]));

        let annotations = annotator.annotate(&image(), &features()).unwrap().unwrap();
        assert_eq!(annotations.labels.len(), 1);
        assert_eq!(annotations.error, None);
    }

    #[test]
    fn detect_labels_requests_label_detection() {
        let stub = RecordingStub::replying(vec![label_response("cat")]);
        let annotator = VisionAnnotator::new(&stub);

        let labels = annotator
            .detect_labels(&Image::from_source_uri("gs://1234/34.jpg"), DEFAULT_MAX_RESULTS)
            .unwrap();

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].description, "cat");

        let request = &stub.last_request().requests[0];
        assert_eq!(
            request.image.source.as_ref().unwrap().gcs_image_uri,
            "gs://1234/34.jpg"
        );
        assert_eq!(request.features.len(), 1);
        assert_eq!(
            request.features[0].type_.value(),
            ProtoFeatureType::LABEL_DETECTION.value()
        );
        assert_eq!(request.features[0].max_results, 10);
    }

    #[test]
    fn detect_helpers_default_to_empty() {
        let annotator = VisionAnnotator::new(RecordingStub::replying(vec![]));

        assert!(annotator.detect_faces(&image(), 3).unwrap().is_empty());
        assert!(annotator.detect_logos(&image(), 3).unwrap().is_empty());
        assert!(annotator.detect_landmarks(&image(), 3).unwrap().is_empty());
        assert!(annotator.detect_text(&image(), 3).unwrap().is_empty());
        assert_eq!(annotator.detect_safe_search(&image()).unwrap(), None);
        assert_eq!(annotator.detect_properties(&image()).unwrap(), None);
        assert_eq!(annotator.stub().calls(), 6);
    }
}
