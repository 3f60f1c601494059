/// Page-level feature selection from `<body data-site="...">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Site {
    Cosmic,
    Enchanted,
    Zen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    CosmicParallax,
    StarmapNav,
    ForestNav,
    SandGarden,
    Pond,
    Lanterns,
    DataSculpture,
    Storybook,
    Plaques,
}

pub const ALL_FEATURES: &[Feature] = &[
    Feature::CosmicParallax,
    Feature::StarmapNav,
    Feature::ForestNav,
    Feature::SandGarden,
    Feature::Pond,
    Feature::Lanterns,
    Feature::DataSculpture,
    Feature::Storybook,
    Feature::Plaques,
];

impl Site {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cosmic" => Some(Site::Cosmic),
            "enchanted" | "forest" => Some(Site::Enchanted),
            "zen" | "next" => Some(Site::Zen),
            _ => None,
        }
    }

    pub fn features(self) -> &'static [Feature] {
        match self {
            Site::Cosmic => &[Feature::CosmicParallax, Feature::StarmapNav],
            Site::Enchanted => &[Feature::ForestNav],
            Site::Zen => &[
                Feature::SandGarden,
                Feature::Pond,
                Feature::Lanterns,
                Feature::DataSculpture,
                Feature::Storybook,
                Feature::Plaques,
            ],
        }
    }
}

/// Features to install for a page; unknown or missing markers get everything.
pub fn features_for(attr: Option<&str>) -> &'static [Feature] {
    attr.and_then(Site::from_attr)
        .map(Site::features)
        .unwrap_or(ALL_FEATURES)
}
