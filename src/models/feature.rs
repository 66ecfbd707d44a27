use serde::{Deserialize, Serialize};

/// A geographic point, decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One map annotation decoded from a feature object.
///
/// The coordinate is mandatory: an element without a usable coordinate is
/// skipped during extraction and never reaches consumers as a partial record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointFeature {
    pub coordinate: Coordinate,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub wikipedia_url: Option<String>,
}

/// The map output of one successful extraction pass.
///
/// `revision` increases on every replace so the renderer can detect new data
/// without deep comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureSet {
    features: Vec<PointFeature>,
    revision: u64,
}

impl FeatureSet {
    /// Create an empty set at revision zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents and bump the revision.
    pub fn replace(&mut self, features: Vec<PointFeature>) {
        self.features = features;
        self.revision += 1;
    }

    /// Current features, in extraction order.
    pub fn features(&self) -> &[PointFeature] {
        &self.features
    }

    /// Opaque change token; consumers compare it against the last one seen.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
