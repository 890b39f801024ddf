// @generated

pub mod image_annotator;
