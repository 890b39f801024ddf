// SPDX-License-Identifier: Apache-2.0

//! Generated protobuf messages and ttrpc stubs for the image annotator
//! service.
//!
//! The blocking stub is exposed under [`sync`], the async one under
//! [`asynchronous`]. Both share the message types in [`image_annotator`].

pub mod asynchronous;
pub mod image_annotator;
#[doc(hidden)]
pub mod image_annotator_ttrpc;

pub mod sync {
    pub use crate::image_annotator_ttrpc;
}
