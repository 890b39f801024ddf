// SPDX-License-Identifier: Apache-2.0

use crate::{
    stub::AnnotatorStub,
    util::{create_ttrpc_client, get_env_address},
    Result,
};
use log::debug;
use ttrpc::context::Context;
use vision_rpc_proto::{
    image_annotator::{BatchAnnotateImagesRequest, BatchAnnotateImagesResponse},
    sync::image_annotator_ttrpc::ImageAnnotatorClient,
};

pub struct VisionRpcClient {
    pub ttrpc_client: ImageAnnotatorClient,
}

impl VisionRpcClient {
    /// Connect to the address in `VISION_RPC_ADDRESS`.
    pub fn new() -> Result<Self> {
        Self::connect(&get_env_address())
    }

    pub fn connect(server_address: &str) -> Result<Self> {
        debug!("Client is sync");

        let ttrpc_client = create_ttrpc_client(server_address)?;
        debug!("Connected to {}", server_address);

        Ok(VisionRpcClient {
            ttrpc_client: ImageAnnotatorClient::new(ttrpc_client),
        })
    }

    pub fn execute<'a, 'b, F, A, R>(&'a self, func: F, ctx: Context, req: &'b A) -> R
    where
        F: Fn(&'a ImageAnnotatorClient, Context, &'b A) -> R,
    {
        func(&self.ttrpc_client, ctx, req)
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
