//! The features highlighted on the homepage, in display order.

use crate::common::FeatureError;
use crate::models::{Description, FeatureItem, Inline, SvgIcon};

pub const FEATURE_COUNT: usize = 3;

pub const AMAZON_EKS_ICON: SvgIcon = SvgIcon::new(
    "amazon-eks",
    include_str!("../../static/img/amazon-eks.svg"),
);

pub const EKS_AUTO_MODE_ICON: SvgIcon = SvgIcon::new(
    "amazon-eks-auto-mode",
    include_str!("../../static/img/amazon-eks-auto-mode.svg"),
);

pub const EKS_CAPABILITIES_ICON: SvgIcon = SvgIcon::new(
    "amazon-eks-capabilities",
    include_str!("../../static/img/amazon-eks-capabilities.svg"),
);

pub static FEATURE_LIST: [FeatureItem; FEATURE_COUNT] = [
    FeatureItem {
        title: "Amazon EKS",
        icon: &AMAZON_EKS_ICON,
        description: Description::new(&[Inline::Text(
            "Amazon Elastic Kubernetes Service (EKS) provides a fully managed \
             Kubernetes service that eliminates the complexity of operating Kubernetes clusters",
        )]),
    },
    FeatureItem {
        title: "EKS Auto Mode",
        icon: &EKS_AUTO_MODE_ICON,
        description: Description::new(&[Inline::Text(
            "With the Auto Mode feature, EKS extends its control to manage nodes on the data plane. \
             This includes automatically provisioning infrastructure, selecting optimal compute \
             instances, dynamically scaling resources and more.",
        )]),
    },
    FeatureItem {
        title: "EKS Capabilities",
        icon: &EKS_CAPABILITIES_ICON,
        description: Description::new(&[Inline::Text(
            "Amazon EKS Capabilities is a layered set of fully managed cluster features that \
             help accelerate developer velocity and offload the complexity of building and \
             scaling with Kubernetes",
        )]),
    },
];

/// Checks the list shape (exactly [`FEATURE_COUNT`] entries) and every entry.
pub fn validate_feature_list(features: &[FeatureItem]) -> Result<(), FeatureError> {
    if features.len() != FEATURE_COUNT {
        return Err(FeatureError::WrongCount {
            expected: FEATURE_COUNT,
            found: features.len(),
        });
    }

    features
        .iter()
        .enumerate()
        .try_for_each(|(position, item)| item.validate(position))
}
