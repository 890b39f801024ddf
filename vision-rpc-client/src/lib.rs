// SPDX-License-Identifier: Apache-2.0

//! Client side of the image annotator service.
//!
//! [`VisionAnnotator`] turns an [`Image`](vision::Image) and a list of
//! [`Feature`](vision::Feature)s into a single batch RPC and hands back the
//! parsed [`Annotations`](vision::Annotations). The RPC itself goes through
//! an [`AnnotatorStub`], normally a [`VisionRpcClient`] talking ttrpc.

use thiserror::Error;

pub mod annotator;
#[cfg(feature = "async")]
pub mod asynchronous;
pub mod cli;
pub mod stub;
#[cfg(not(feature = "async"))]
pub mod sync;
pub mod util;

pub use annotator::VisionAnnotator;
#[cfg(feature = "async")]
pub use asynchronous::client::VisionRpcClient;
pub use cli::Cli;
pub use stub::AnnotatorStub;
#[cfg(not(feature = "async"))]
pub use sync::client::VisionRpcClient;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Vision error: {0}")]
    Vision(#[from] vision::Error),

    #[error("ttrpc error: {0}")]
    Ttrpc(#[from] ttrpc::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;
