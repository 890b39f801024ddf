// SPDX-License-Identifier: Apache-2.0

// The generated stub refers to its messages through `super::image_annotator`.
pub use crate::image_annotator;

pub mod image_annotator_ttrpc;
