// SPDX-License-Identifier: Apache-2.0

use vision_rpc_proto::image_annotator::{
    Color as ProtoColor, ColorInfo as ProtoColorInfo, ImageProperties as ProtoImageProperties,
};

/// An RGBA color, channels in `[0, 255]`, alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl From<&ProtoColor> for Color {
    fn from(color: &ProtoColor) -> Self {
        Color {
            red: color.red,
            green: color.green,
            blue: color.blue,
            alpha: color.alpha,
        }
    }
}

/// A dominant color with its confidence and share of the image.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorInformation {
    pub color: Color,
    pub score: f32,
    pub pixel_fraction: f32,
}

impl From<&ProtoColorInfo> for ColorInformation {
    fn from(info: &ProtoColorInfo) -> Self {
        ColorInformation {
            color: info.color.as_ref().map(Color::from).unwrap_or_default(),
            score: info.score,
            pixel_fraction: info.pixel_fraction,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePropertiesAnnotation {
    pub colors: Vec<ColorInformation>,
}

impl From<&ProtoImageProperties> for ImagePropertiesAnnotation {
    fn from(properties: &ProtoImageProperties) -> Self {
        let colors = match properties.dominant_colors.as_ref() {
            Some(dominant) => dominant.colors.iter().map(ColorInformation::from).collect(),
            None => Vec::new(),
        };

        ImagePropertiesAnnotation { colors }
    }
}
