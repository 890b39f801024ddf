// This file is generated by ttrpc-compiler 0.6.2. Do not edit
// @generated

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unknown_lints)]
#![allow(clipto_camel_casepy)]
#![allow(box_pointers)]
#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unsafe_code)]
#![allow(unused_imports)]
#![allow(unused_results)]
#![allow(clippy::all)]
use protobuf::{CodedInputStream, CodedOutputStream, Message};
use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;

#[derive(Clone)]
pub struct ImageAnnotatorClient {
    client: ::ttrpc::r#async::Client,
}

impl ImageAnnotatorClient {
    pub fn new(client: ::ttrpc::r#async::Client) -> Self {
        ImageAnnotatorClient {
            client: client,
        }
    }

    pub async fn batch_annotate_images(&self, ctx: ttrpc::context::Context, req: &super::image_annotator::BatchAnnotateImagesRequest) -> ::ttrpc::Result<super::image_annotator::BatchAnnotateImagesResponse> {
        let mut cres = super::image_annotator::BatchAnnotateImagesResponse::new();
        ::ttrpc::async_client_request!(self, ctx, req, "vision.ImageAnnotator", "BatchAnnotateImages", cres);
    }
}

struct BatchAnnotateImagesMethod {
    service: Arc<Box<dyn ImageAnnotator + Send + Sync>>,
}

#[async_trait]
impl ::ttrpc::r#async::MethodHandler for BatchAnnotateImagesMethod {
    async fn handler(&self, ctx: ::ttrpc::r#async::TtrpcContext, req: ::ttrpc::Request) -> ::ttrpc::Result<::ttrpc::Response> {
        ::ttrpc::async_request_handler!(self, ctx, req, image_annotator, BatchAnnotateImagesRequest, batch_annotate_images);
    }
}

#[async_trait]
pub trait ImageAnnotator: Sync {
    async fn batch_annotate_images(&self, _ctx: &::ttrpc::r#async::TtrpcContext, _: super::image_annotator::BatchAnnotateImagesRequest) -> ::ttrpc::Result<super::image_annotator::BatchAnnotateImagesResponse> {
        Err(::ttrpc::Error::RpcStatus(::ttrpc::get_status(::ttrpc::Code::NOT_FOUND, "/vision.ImageAnnotator/BatchAnnotateImages is not supported".to_string())))
    }
}

pub fn create_image_annotator(service: Arc<Box<dyn ImageAnnotator + Send + Sync>>) -> HashMap<String, ::ttrpc::r#async::Service> {
    let mut ret = HashMap::new();
    let mut methods = HashMap::new();
    let streams = HashMap::new();

    methods.insert("BatchAnnotateImages".to_string(),
                    Box::new(BatchAnnotateImagesMethod{service: service.clone()}) as Box<dyn ::ttrpc::r#async::MethodHandler + Send + Sync>);

    ret.insert("vision.ImageAnnotator".to_string(), ::ttrpc::r#async::Service{ methods, streams });
    ret
}
