// SPDX-License-Identifier: Apache-2.0

use crate::geometry::{Bounds, LocationInformation};
use vision_rpc_proto::image_annotator::EntityAnnotation as ProtoEntityAnnotation;

/// A detected label, landmark, logo or piece of text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityAnnotation {
    /// Opaque knowledge graph entity ID, may be empty.
    pub mid: String,
    /// Language of `description`, only set for text.
    pub locale: String,
    pub description: String,
    pub score: f32,
    pub bounds: Option<Bounds>,
    pub locations: Vec<LocationInformation>,
}

impl From<&ProtoEntityAnnotation> for EntityAnnotation {
    fn from(entity: &ProtoEntityAnnotation) -> Self {
        EntityAnnotation {
            mid: entity.mid.clone(),
            locale: entity.locale.clone(),
            description: entity.description.clone(),
            score: entity.score,
            bounds: entity.bounding_poly.as_ref().map(Bounds::from),
            locations: entity
                .locations
                .iter()
                .map(LocationInformation::from)
                .collect(),
        }
    }
}
