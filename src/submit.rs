/// Submission of the finished collection to the downstream collaborator.
///
/// The collection is POSTed as JSON in a single request. Retry and
/// transport policy beyond a status check belong to the receiving side;
/// a failure here aborts the run like any other.

use geojson::FeatureCollection;

use crate::logging::{self, DataSource};
use crate::model::CotripError;

/// POST the collection to `endpoint`. Non-2xx responses are errors.
pub fn submit_collection(
    client: &reqwest::blocking::Client,
    endpoint: &str,
    collection: &FeatureCollection,
) -> Result<(), CotripError> {
    let response = client
        .post(endpoint)
        .json(collection)
        .send()
        .map_err(|e| CotripError::TransportError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CotripError::HttpError(response.status().as_u16()));
    }

    logging::info(
        DataSource::Submit,
        &format!("ok - submitted {} features", collection.features.len()),
    );
    Ok(())
}
