/// Upstream data ingestion for the pipeline.
///
/// Submodules:
/// - `cotrip` — cursor-paginated weather station fetch from the CoTrip API.

pub mod cotrip;
