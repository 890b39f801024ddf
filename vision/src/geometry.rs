// SPDX-License-Identifier: Apache-2.0

use vision_rpc_proto::image_annotator::{
    BoundingPoly as ProtoBoundingPoly, LocationInfo as ProtoLocationInfo, Vertex as ProtoVertex,
};

/// A pixel coordinate in the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl From<&ProtoVertex> for Vertex {
    fn from(vertex: &ProtoVertex) -> Self {
        Vertex {
            x: vertex.x,
            y: vertex.y,
        }
    }
}

/// A polygon around a detected item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bounds {
    pub vertices: Vec<Vertex>,
}

impl From<&ProtoBoundingPoly> for Bounds {
    fn from(poly: &ProtoBoundingPoly) -> Self {
        Bounds {
            vertices: poly.vertices.iter().map(Vertex::from).collect(),
        }
    }
}

/// Geographic location of a detected entity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationInformation {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&ProtoLocationInfo> for LocationInformation {
    fn from(info: &ProtoLocationInfo) -> Self {
        match info.lat_lng.as_ref() {
            Some(lat_lng) => LocationInformation {
                latitude: lat_lng.latitude,
                longitude: lat_lng.longitude,
            },
            None => LocationInformation::default(),
        }
    }
}
