/// Pipeline composition and the output collector.
///
/// The in-memory half of the pipeline (normalize, explode, collect) is
/// composed here so it can run and be tested without any network access.
/// Fetch order is preserved throughout: non-multi features keep their
/// arrival position, multi-part features expand in place sub-ordered by
/// coordinate index.

use geojson::{Feature, FeatureCollection};

use crate::model::CotripError;
use crate::transform::{explode::explode, normalize::normalize};

/// Assemble the final ordered feature list into the output collection.
///
/// Pure wrapping: no reordering, no filtering, no deduplication.
pub fn collect(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Run every raw station record through normalization and explosion, then
/// collect the result.
///
/// The first malformed record aborts the whole run; nothing partial is
/// returned.
pub fn build_collection(stations: Vec<Feature>) -> Result<FeatureCollection, CotripError> {
    let mut features = Vec::with_capacity(stations.len());
    for raw in stations {
        let canonical = normalize(raw)?;
        features.extend(explode(canonical)?);
    }
    Ok(collect(features))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
