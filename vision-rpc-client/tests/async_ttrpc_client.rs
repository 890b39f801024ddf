// SPDX-License-Identifier: Apache-2.0

#![cfg(feature = "async")]

use async_trait::async_trait;
use std::{
    fs,
    sync::{Arc, Mutex},
};
use tokio::runtime::Runtime;
use ttrpc::asynchronous::{Server, TtrpcContext};
use vision::{Feature, FeatureType, Image};
use vision_rpc_client::{VisionAnnotator, VisionRpcClient};
use vision_rpc_proto::{
    asynchronous::image_annotator_ttrpc::{create_image_annotator, ImageAnnotator},
    image_annotator::{
        AnnotateImageResponse, BatchAnnotateImagesRequest, BatchAnnotateImagesResponse,
        EntityAnnotation,
    },
};

/// Replies with `responses` copies of a single "cat" label.
struct FakeAnnotator {
    responses: usize,
    requests: Arc<Mutex<Vec<BatchAnnotateImagesRequest>>>,
}

#[async_trait]
impl ImageAnnotator for FakeAnnotator {
    async fn batch_annotate_images(
        &self,
        _ctx: &TtrpcContext,
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

/// Async server on its own runtime, so the blocking client can drive its
/// runtime from the test thread.
struct TestServer {
    server: Option<Server>,
    runtime: Runtime,
    address: String,
    path: String,
    requests: Arc<Mutex<Vec<BatchAnnotateImagesRequest>>>,
}

impl TestServer {
    fn start(name: &str, responses: usize) -> Self {
        let path = std::env::temp_dir()
            .join(format!("vision-rpc-async-{}-{}.sock", name, std::process::id()))
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

        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(async {
            let mut server = Server::new()
                .bind(&address)
                .unwrap()
                .register_service(service);
            server.start().await.unwrap();
            server
        });

        TestServer {
            server: Some(server),
            runtime,
            address,
            path,
            requests,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(mut server) = self.server.take() {
            let _ = self.runtime.block_on(server.shutdown());
        }
        let _ = fs::remove_file(&self.path);
    }
}

fn label_features() -> Vec<Feature> {
    vec![Feature::new(FeatureType::LabelDetection, 5)]
}

#[test]
fn annotate_over_async_ttrpc() {
    let server = TestServer::start("single", 1);
    let annotator = VisionAnnotator::new(VisionRpcClient::connect(&server.address).unwrap());

    let annotations = annotator
        .annotate(&Image::from_content(&b"abc 1 2 3"[..]), &label_features())
        .unwrap()
        .unwrap();

    assert_eq!(annotations.labels.len(), 1);
    assert_eq!(annotations.labels[0].description, "cat");
    assert_eq!(annotations.error, None);

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
fn empty_batch_over_async_ttrpc() {
    let server = TestServer::start("empty", 0);
    let annotator = VisionAnnotator::new(VisionRpcClient::connect(&server.address).unwrap());

    let res = annotator
        .annotate(&Image::from_source_uri("gs://1234/34.jpg"), &label_features())
        .unwrap();

    assert_eq!(res, None);

    let requests = server.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].requests[0].image.source.gcs_image_uri,
        "gs://1234/34.jpg"
    );
}
