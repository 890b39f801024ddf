// SPDX-License-Identifier: Apache-2.0

#![cfg(not(feature = "async"))]

use std::{
    fs,
    sync::{Arc, Mutex},
};
use ttrpc::sync::Server;
use vision::{Feature, FeatureType, Image};
use vision_rpc_client::{Error, VisionAnnotator, VisionRpcClient};
use vision_rpc_proto::{
    image_annotator::{
        AnnotateImageResponse, BatchAnnotateImagesRequest, BatchAnnotateImagesResponse,
        EntityAnnotation,
    },
    sync::image_annotator_ttrpc::{create_image_annotator, ImageAnnotator},
};

/// Replies with `responses` copies of a single "cat" label.
struct FakeAnnotator {
    responses: usize,
    requests: Arc<Mutex<Vec<BatchAnnotateImagesRequest>>>,
}

impl ImageAnnotator for FakeAnnotator {
    fn batch_annotate_images(
        &self,
        _ctx: &ttrpc::TtrpcContext,
        req: BatchAnnotateImagesRequest,
    ) -> ttrpc::Result<BatchAnnotateImagesResponse> {
        self.requests.lock().unwrap().push(req);

        let response = AnnotateImageResponse {
            label_annotations: vec![EntityAnnotation {
                description: "cat".to_string(),
                score: 0.5,
                ..Default::default()
            }],
            ..Default::default()
        };

        Ok(BatchAnnotateImagesResponse {
            responses: vec![response; self.responses],
            ..Default::default()
        })
    }
}

struct TestServer {
    server: Option<Server>,
    address: String,
    path: String,
    requests: Arc<Mutex<Vec<BatchAnnotateImagesRequest>>>,
}

impl TestServer {
    fn start(name: &str, responses: usize) -> Self {
        let path = std::env::temp_dir()
            .join(format!("vision-rpc-{}-{}.sock", name, std::process::id()))
            .to_string_lossy()
            .into_owned();
        let _ = fs::remove_file(&path);
        let address = format!("unix://{}", path);

        let requests = Arc::new(Mutex::new(Vec::new()));
        let annotator: Box<dyn ImageAnnotator + Send + Sync> = Box::new(FakeAnnotator {
            responses,
            requests: requests.clone(),
        });
        let service = create_image_annotator(Arc::new(annotator));

        let mut server = Server::new()
            .bind(&address)
            .unwrap()
            .register_service(service);
        server.start().unwrap();

        TestServer {
            server: Some(server),
            address,
            path,
            requests,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(server) = self.server.take() {
            server.shutdown();
        }
        let _ = fs::remove_file(&self.path);
    }
}

fn label_features() -> Vec<Feature> {
    vec![Feature::new(FeatureType::LabelDetection, 5)]
}

#[test]
fn annotate_over_ttrpc() {
    let server = TestServer::start("single", 1);
    let annotator = VisionAnnotator::new(VisionRpcClient::connect(&server.address).unwrap());

    let annotations = annotator
        .annotate(&Image::from_content(&b"abc 1 2 3"[..]), &label_features())
        .unwrap()
        .unwrap();

    assert_eq!(annotations.labels.len(), 1);
    assert_eq!(annotations.labels[0].description, "cat");

    let requests = server.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].requests.len(), 1);
    assert_eq!(
        requests[0].requests[0].image.content,
        b"YWJjIDEgMiAz".to_vec()
    );
    assert_eq!(requests[0].requests[0].features[0].max_results, 5);
}

#[test]
fn empty_batch_over_ttrpc() {
    let server = TestServer::start("empty", 0);
    let annotator = VisionAnnotator::new(VisionRpcClient::connect(&server.address).unwrap());

    let res = annotator
        .annotate(&Image::from_source_uri("gs://1234/34.jpg"), &label_features())
        .unwrap();

    assert_eq!(res, None);
    assert_eq!(server.requests.lock().unwrap().len(), 1);
}

#[test]
fn multiple_responses_over_ttrpc() {
    let server = TestServer::start("multiple", 2);
    let annotator = VisionAnnotator::new(VisionRpcClient::connect(&server.address).unwrap());

    let res = annotator.annotate(&Image::from_source_uri("gs://1234/34.jpg"), &label_features());

    assert!(matches!(res, Err(Error::Unsupported(_))));
    assert_eq!(server.requests.lock().unwrap().len(), 1);
}

#[test]
fn connect_to_missing_server_fails() {
    let path = std::env::temp_dir().join(format!("vision-rpc-missing-{}.sock", std::process::id()));
    let res = VisionRpcClient::connect(&format!("unix://{}", path.display()));

    assert!(matches!(res, Err(Error::Ttrpc(_))));
}
