// SPDX-License-Identifier: Apache-2.0

//! Domain types for image annotation requests and results, and their
//! conversions to and from the wire messages in [`vision_rpc_proto`].

use thiserror::Error as ThisError;

pub mod annotations;
pub mod color;
pub mod entity;
pub mod face;
pub mod feature;
pub mod geometry;
pub mod image;
pub mod likelihood;
pub mod safe_search;

pub use annotations::{Annotations, ImageError};
pub use entity::EntityAnnotation;
pub use face::Face;
pub use feature::{to_wire_feature, Feature, FeatureType};
pub use image::{to_wire_image, Image};
pub use likelihood::Likelihood;
pub use safe_search::SafeSearchAnnotation;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Malformed request input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown feature type name
    #[error("Unknown feature type: {0}")]
    UnknownFeatureType(String),

    /// Reading image content failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
