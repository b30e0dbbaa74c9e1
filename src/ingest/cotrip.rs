/// CoTrip Data API Client
///
/// Retrieves weather station records from the Colorado DOT CoTrip API.
/// The endpoint is cursor-paginated: each response carries a `next-offset`
/// header naming the cursor for the following page. An absent header, or
/// the literal value `"None"`, signals the end of data.
///
/// API: https://data.cotrip.org/api/v1/weatherStations

use geojson::Feature;
use serde::Deserialize;

use crate::logging::{self, DataSource};
use crate::model::{CotripError, OFFSET_SENTINEL};

pub const COTRIP_BASE_URL: &str = "https://data.cotrip.org";

/// Name of the response header carrying the pagination cursor.
pub const NEXT_OFFSET_HEADER: &str = "next-offset";

// ============================================================================
// CoTrip API Response Structures
// ============================================================================

/// One page of the weather station listing.
///
/// The body is a GeoJSON-style object whose `features` array holds the raw
/// station records. A body without a `features` array is a parse error.
#[derive(Debug, Deserialize)]
pub struct StationsPage {
    pub features: Vec<Feature>,
}

// ============================================================================
// Pagination State
// ============================================================================

/// Accumulated pagination state, threaded through the fetch loop.
///
/// `cursor` holds the most recent `next-offset` header value, `pages` is
/// tracked for observability only.
#[derive(Debug, Default)]
pub struct FetchState {
    pub records: Vec<Feature>,
    pub cursor: Option<String>,
    pub pages: usize,
}

impl FetchState {
    /// Fold one fetched page into the state, preserving arrival order.
    pub fn absorb(mut self, page: StationsPage, next_offset: Option<String>) -> FetchState {
        self.records.extend(page.features);
        self.cursor = next_offset;
        self.pages += 1;
        self
    }

    /// Whether the upstream signalled another page. Cursor presence is the
    /// sole termination signal — an empty page with a cursor continues.
    pub fn has_more(&self) -> bool {
        matches!(self.cursor.as_deref(), Some(cursor) if cursor != OFFSET_SENTINEL)
    }
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Build the station listing URL for one page.
///
/// The `apiKey` query parameter is always present; `offset` is appended
/// only once a cursor is held, so the first request never sends one.
pub fn build_stations_url(base_url: &str, api_key: &str, offset: Option<&str>) -> String {
    let mut url = format!(
        "{}/api/v1/weatherStations?apiKey={}",
        base_url.trim_end_matches('/'),
        api_key
    );
    if let Some(cursor) = offset {
        url.push_str("&offset=");
        url.push_str(cursor);
    }
    url
}

/// Fetch every weather station record, following the pagination cursor
/// until exhausted.
///
/// Returns the concatenated raw record list in arrival order. Any
/// transport or parse error aborts the loop and propagates; no partial
/// accumulator is returned.
pub fn fetch_all_stations(
    client: &reqwest::blocking::Client,
    base_url: &str,
    api_key: &str,
) -> Result<Vec<Feature>, CotripError> {
    let mut state = FetchState::default();

    loop {
        logging::info(
            DataSource::Cotrip,
            &format!("ok - fetching batch {} of weather stations", state.pages),
        );

        let url = build_stations_url(base_url, api_key, state.cursor.as_deref());
        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| CotripError::TransportError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CotripError::HttpError(response.status().as_u16()));
        }

        // The cursor must be read before the body consumes the response.
        let next_offset = response
            .headers()
            .get(NEXT_OFFSET_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let page: StationsPage = response
            .json()
            .map_err(|e| CotripError::ParseError(e.to_string()))?;

        state = state.absorb(page, next_offset);
        if !state.has_more() {
            break;
        }
    }

    Ok(state.records)
}

// ============================================================================
// Tests
// ============================================================================
