// SPDX-License-Identifier: Apache-2.0

use crate::likelihood::Likelihood;
use vision_rpc_proto::image_annotator::SafeSearchAnnotation as ProtoSafeSearchAnnotation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SafeSearchAnnotation {
    pub adult: Likelihood,
    pub spoof: Likelihood,
    pub medical: Likelihood,
    pub violence: Likelihood,
}

impl From<&ProtoSafeSearchAnnotation> for SafeSearchAnnotation {
    fn from(safe_search: &ProtoSafeSearchAnnotation) -> Self {
        SafeSearchAnnotation {
            adult: safe_search.adult.into(),
            spoof: safe_search.spoof.into(),
            medical: safe_search.medical.into(),
            violence: safe_search.violence.into(),
        }
    }
}
