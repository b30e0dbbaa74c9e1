/// Raw station record normalization.
///
/// Maps each record fetched from CoTrip into the canonical feature shape:
/// the feature id is lifted out of `properties.id`, the entire original
/// property bag is nested under `metadata`, `callsign` mirrors
/// `metadata.type`, and `type` becomes the fixed ground symbology code.
/// The upstream `type` field remains reachable only via `metadata.type`.

use geojson::feature::Id;
use geojson::{Feature, JsonObject, JsonValue};

use crate::model::{COT_TYPE_GROUND, CotripError};

/// Normalize one raw station record into a canonical feature.
///
/// Pure: the input is consumed and a new feature is returned. Geometry,
/// top-level bbox, and foreign members carry through unchanged.
///
/// A record whose `properties.id` is absent, empty, or not a JSON string
/// fails with `MissingStationId` rather than emitting a malformed id.
pub fn normalize(raw: Feature) -> Result<Feature, CotripError> {
    let properties = raw.properties.ok_or_else(|| {
        CotripError::MissingStationId("record has no properties object".to_string())
    })?;

    let id = match properties.get("id").and_then(JsonValue::as_str) {
        Some(id) if !id.is_empty() => id.to_string(),
        Some(_) => {
            return Err(CotripError::MissingStationId(
                "properties.id is empty".to_string(),
            ));
        }
        None => {
            return Err(CotripError::MissingStationId(
                "properties.id is absent or not a string".to_string(),
            ));
        }
    };

    // callsign mirrors the upstream type field, which is about to move
    // under metadata. An absent upstream type means no callsign key at all.
    let callsign = properties.get("type").cloned();

    let mut canonical = JsonObject::new();
    canonical.insert("metadata".to_string(), JsonValue::Object(properties));
    if let Some(callsign) = callsign {
        canonical.insert("callsign".to_string(), callsign);
    }
    canonical.insert(
        "type".to_string(),
        JsonValue::String(COT_TYPE_GROUND.to_string()),
    );

    Ok(Feature {
        bbox: raw.bbox,
        geometry: raw.geometry,
        id: Some(Id::String(id)),
        properties: Some(canonical),
        foreign_members: raw.foreign_members,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
