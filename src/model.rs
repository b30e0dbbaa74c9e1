/// Core constants and error handling for the CoTrip station pipeline.
///
/// This module defines the shared pieces imported by all other modules.
/// It contains no logic and no I/O — only the symbology constant, the
/// pagination sentinel, and the crate-level error type.

// ---------------------------------------------------------------------------
// Symbology
// ---------------------------------------------------------------------------

/// CoT symbology code applied to every output feature: a ground-based
/// entity. Unrelated to the upstream `type` field, which after
/// normalization is only reachable via `metadata.type`.
pub const COT_TYPE_GROUND: &str = "a-f-G";

// ---------------------------------------------------------------------------
// Pagination sentinel
// ---------------------------------------------------------------------------

/// Literal value of the `next-offset` header the CoTrip API uses to signal
/// the end of data. Treated exactly like an absent header.
pub const OFFSET_SENTINEL: &str = "None";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or transforming CoTrip station data.
///
/// There is no local recovery anywhere in the pipeline: every variant
/// aborts the run before anything is submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum CotripError {
    /// `COTRIP_TOKEN` was missing or empty. Raised before any network call.
    MissingToken,
    /// Non-2xx HTTP response from the CoTrip API or the submit endpoint.
    HttpError(u16),
    /// The request could not be sent or the response could not be read.
    TransportError(String),
    /// The response body could not be deserialized, or the outgoing
    /// collection could not be serialized.
    ParseError(String),
    /// A station record was missing a usable string `properties.id`.
    /// Raised instead of emitting a corrupt feature id.
    MissingStationId(String),
}

impl std::fmt::Display for CotripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CotripError::MissingToken => write!(f, "No CoTrip API token provided"),
            CotripError::HttpError(code) => write!(f, "HTTP error: {}", code),
            CotripError::TransportError(msg) => write!(f, "Transport error: {}", msg),
            CotripError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CotripError::MissingStationId(context) => {
                write!(f, "Station record missing id: {}", context)
            }
        }
    }
}

impl std::error::Error for CotripError {}
