// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use std::sync::Arc;
use vision_rpc_proto::image_annotator::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse};

/// The batch annotate RPC, as seen by [`VisionAnnotator`](crate::VisionAnnotator).
///
/// Implemented by the ttrpc backed [`VisionRpcClient`](crate::VisionRpcClient);
/// anything else that can answer a batch request can stand in for it.
pub trait AnnotatorStub {
    fn batch_annotate_images(
        &self,
        req: &BatchAnnotateImagesRequest,
    ) -> Result<BatchAnnotateImagesResponse>;
}

impl<S: AnnotatorStub + ?Sized> AnnotatorStub for &S {
    fn batch_annotate_images(
        &self,
        req: &BatchAnnotateImagesRequest,
    ) -> Result<BatchAnnotateImagesResponse> {
        (**self).batch_annotate_images(req)
    }
}

impl<S: AnnotatorStub + ?Sized> AnnotatorStub for Arc<S> {
    fn batch_annotate_images(
        &self,
        req: &BatchAnnotateImagesRequest,
    ) -> Result<BatchAnnotateImagesResponse> {
        (**self).batch_annotate_images(req)
    }
}
