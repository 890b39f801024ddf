// SPDX-License-Identifier: Apache-2.0

use crate::{
    stub::AnnotatorStub,
    util::{create_ttrpc_client, get_env_address},
    Result,
};
use log::debug;
use std::{future::Future, sync::Arc};
use tokio::runtime::Runtime;
use ttrpc::context::Context;
use vision_rpc_proto::{
    asynchronous::image_annotator_ttrpc::ImageAnnotatorClient,
    image_annotator::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse},
};

/// Async ttrpc client behind a blocking interface: every call is driven to
/// completion on the client's own runtime.
pub struct VisionRpcClient {
    pub ttrpc_client: ImageAnnotatorClient,
    pub runtime: Arc<Runtime>,
}

impl VisionRpcClient {
    /// Connect to the address in `VISION_RPC_ADDRESS`.
    pub fn new() -> Result<Self> {
        Self::connect(&get_env_address())
    }

    pub fn connect(server_address: &str) -> Result<Self> {
        debug!("Client is async");

        let r = Runtime::new()?;

        let _guard = r.enter();
        let ttrpc_client = create_ttrpc_client(server_address)?;
        debug!("Connected to {}", server_address);

        Ok(VisionRpcClient {
            ttrpc_client: ImageAnnotatorClient::new(ttrpc_client),
            runtime: Arc::new(r),
        })
    }

    pub fn execute<'a, 'b, F, A, R>(&'a self, func: F, ctx: Context, req: &'b A) -> R::Output
    where
        F: Fn(&'a ImageAnnotatorClient, Context, &'b A) -> R,
        R: Future,
    {
        self.runtime
            .block_on(async { func(&self.ttrpc_client, ctx, req).await })
    }
}

impl AnnotatorStub for VisionRpcClient {
    fn batch_annotate_images(
        &self,
        req: &BatchAnnotateImagesRequest,
    ) -> Result<BatchAnnotateImagesResponse> {
        let ctx = Context::default();

        Ok(self.execute(ImageAnnotatorClient::batch_annotate_images, ctx, req)?)
    }
}
