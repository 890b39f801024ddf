// SPDX-License-Identifier: Apache-2.0

use derive_more::Display;
use protobuf::EnumOrUnknown;
use vision_rpc_proto::image_annotator::Likelihood as ProtoLikelihood;

/// How likely a detector considers a property to hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Likelihood {
    #[default]
    #[display("UNKNOWN")]
    Unknown,
    #[display("VERY_UNLIKELY")]
    VeryUnlikely,
    #[display("UNLIKELY")]
    Unlikely,
    #[display("POSSIBLE")]
    Possible,
    #[display("LIKELY")]
    Likely,
    #[display("VERY_LIKELY")]
    VeryLikely,
}

impl From<ProtoLikelihood> for Likelihood {
    fn from(likelihood: ProtoLikelihood) -> Self {
        match likelihood {
            ProtoLikelihood::UNKNOWN => Likelihood::Unknown,
            ProtoLikelihood::VERY_UNLIKELY => Likelihood::VeryUnlikely,
            ProtoLikelihood::UNLIKELY => Likelihood::Unlikely,
            ProtoLikelihood::POSSIBLE => Likelihood::Possible,
            ProtoLikelihood::LIKELY => Likelihood::Likely,
            ProtoLikelihood::VERY_LIKELY => Likelihood::VeryLikely,
        }
    }
}

/// Values the service sends that this client does not know map to `Unknown`.
impl From<EnumOrUnknown<ProtoLikelihood>> for Likelihood {
    fn from(likelihood: EnumOrUnknown<ProtoLikelihood>) -> Self {
        likelihood
            .enum_value()
            .map(Likelihood::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_values_map_to_unknown() {
        assert_eq!(
            Likelihood::from(EnumOrUnknown::<ProtoLikelihood>::from_i32(42)),
            Likelihood::Unknown
        );
        assert_eq!(
            Likelihood::from(EnumOrUnknown::new(ProtoLikelihood::LIKELY)),
            Likelihood::Likely
        );
    }

    #[test]
    fn likelihoods_are_ordered() {
        assert!(Likelihood::VeryUnlikely < Likelihood::Possible);
        assert!(Likelihood::Likely < Likelihood::VeryLikely);
        assert_eq!(Likelihood::VeryLikely.to_string(), "VERY_LIKELY");
    }
}
