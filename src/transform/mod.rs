/// In-memory transformation stages of the pipeline.
///
/// Both stages are pure: they consume a feature and return new structures,
/// never mutating shared state, so each is testable in isolation.
///
/// Submodules:
/// - `normalize` — reshapes a raw station record into the canonical feature.
/// - `explode` — splits multi-part geometries into single-part features.

pub mod explode;
pub mod normalize;
