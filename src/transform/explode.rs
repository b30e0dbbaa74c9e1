/// Multi-part geometry explosion.
///
/// Downstream consumers require single-part geometries, so any feature
/// whose geometry type carries the `Multi` prefix is split into one
/// feature per part. Part identity is the 0-based coordinate index
/// appended to the parent id, so repeated runs against unchanged upstream
/// data produce stable ids.

use geojson::feature::Id;
use geojson::{Feature, Geometry, Value};

use crate::model::CotripError;

/// Explode one canonical feature into single-part features.
///
/// Pure. A `MultiPoint`/`MultiLineString`/`MultiPolygon` geometry of *k*
/// parts yields *k* features, each carrying a deep copy of the parent's
/// properties, the *i*-th part as its geometry, and id `"<parent>-<i>"`
/// in coordinate order. Every other feature passes through as a single
/// element; `GeometryCollection` does not carry the `Multi` prefix and is
/// never split.
///
/// A multi-part feature without a usable string id is a structured error:
/// derived ids would otherwise be corrupt.
pub fn explode(feature: Feature) -> Result<Vec<Feature>, CotripError> {
    let Feature {
        bbox,
        geometry,
        id,
        properties,
        foreign_members,
    } = feature;

    let Some(geometry) = geometry else {
        return Ok(vec![Feature {
            bbox,
            geometry: None,
            id,
            properties,
            foreign_members,
        }]);
    };

    let Geometry {
        bbox: geometry_bbox,
        value,
        foreign_members: geometry_foreign_members,
    } = geometry;

    let parts: Vec<Value> = match value {
        Value::MultiPoint(points) => points.into_iter().map(Value::Point).collect(),
        Value::MultiLineString(lines) => lines.into_iter().map(Value::LineString).collect(),
        Value::MultiPolygon(polygons) => polygons.into_iter().map(Value::Polygon).collect(),
        single => {
            return Ok(vec![Feature {
                bbox,
                geometry: Some(Geometry {
                    bbox: geometry_bbox,
                    value: single,
                    foreign_members: geometry_foreign_members,
                }),
                id,
                properties,
                foreign_members,
            }]);
        }
    };

    let parent_id = match &id {
        Some(Id::String(parent)) if !parent.is_empty() => parent.clone(),
        _ => {
            return Err(CotripError::MissingStationId(
                "multi-part feature has no usable id".to_string(),
            ));
        }
    };

    // Derived geometries are rebuilt from the bare part; only the parent's
    // top-level bbox and foreign members are copied onto each feature.
    Ok(parts
        .into_iter()
        .enumerate()
        .map(|(index, part)| Feature {
            bbox: bbox.clone(),
            geometry: Some(Geometry::new(part)),
            id: Some(Id::String(format!("{}-{}", parent_id, index))),
            properties: properties.clone(),
            foreign_members: foreign_members.clone(),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature_with_geometry(id: &str, geometry: serde_json::Value) -> Feature {
        serde_json::from_value(json!({
            "type": "Feature",
            "id": id,
            "properties": { "callsign": "RWIS", "type": "a-f-G" },
            "geometry": geometry
        }))
        .expect("fixture feature should deserialize")
    }

    fn id_text(feature: &Feature) -> String {
        match &feature.id {
            Some(Id::String(s)) => s.clone(),
            other => panic!("expected a string id, got {:?}", other),
        }
    }

    // --- Multi-part geometries ----------------------------------------------

    #[test]
    fn test_multipoint_explodes_into_points_with_indexed_ids() {
        let feature = feature_with_geometry(
            "S1",
            json!({ "type": "MultiPoint", "coordinates": [[1.0, 2.0], [3.0, 4.0]] }),
        );

        let exploded = explode(feature).expect("multi-part feature should explode");
        assert_eq!(exploded.len(), 2);

        assert_eq!(id_text(&exploded[0]), "S1-0");
        assert_eq!(id_text(&exploded[1]), "S1-1");
        assert_eq!(
            exploded[0].geometry.as_ref().map(|g| &g.value),
            Some(&Value::Point(vec![1.0, 2.0]))
        );
        assert_eq!(
            exploded[1].geometry.as_ref().map(|g| &g.value),
            Some(&Value::Point(vec![3.0, 4.0]))
        );
    }

    #[test]
    fn test_multilinestring_parts_become_linestrings() {
        let feature = feature_with_geometry(
            "S2",
            json!({
                "type": "MultiLineString",
                "coordinates": [
                    [[0.0, 0.0], [1.0, 1.0]],
                    [[2.0, 2.0], [3.0, 3.0]]
                ]
            }),
        );

        let exploded = explode(feature).expect("multi-part feature should explode");
        assert_eq!(exploded.len(), 2);
        for feature in &exploded {
            assert!(matches!(
                feature.geometry.as_ref().map(|g| &g.value),
                Some(Value::LineString(_))
            ));
        }
    }

    #[test]
    fn test_multipolygon_parts_become_polygons_in_coordinate_order() {
        let first_ring = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 0.0],
        ];
        let second_ring = vec![
            vec![5.0, 5.0],
            vec![6.0, 5.0],
            vec![6.0, 6.0],
            vec![5.0, 5.0],
        ];
        let feature = feature_with_geometry(
            "S3",
            json!({
                "type": "MultiPolygon",
                "coordinates": [[first_ring], [second_ring]]
            }),
        );

        let exploded = explode(feature).expect("multi-part feature should explode");
        assert_eq!(exploded.len(), 2);
        assert_eq!(
            exploded[0].geometry.as_ref().map(|g| &g.value),
            Some(&Value::Polygon(vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]]))
        );
        assert_eq!(id_text(&exploded[1]), "S3-1");
    }

    #[test]
    fn test_each_part_gets_its_own_copy_of_the_properties() {
        let feature = feature_with_geometry(
            "S1",
            json!({ "type": "MultiPoint", "coordinates": [[1.0, 2.0], [3.0, 4.0]] }),
        );
        let expected = feature.properties.clone();

        let mut exploded = explode(feature).expect("multi-part feature should explode");
        // Mutating one part's properties must not be visible in another.
        exploded[0]
            .properties
            .as_mut()
            .expect("properties")
            .insert("remarks".to_string(), json!("edited"));
        assert_eq!(exploded[1].properties, expected);
    }

    #[test]
    fn test_zero_part_multi_geometry_yields_no_features() {
        let feature =
            feature_with_geometry("S1", json!({ "type": "MultiPoint", "coordinates": [] }));
        let exploded = explode(feature).expect("empty multi should not error");
        assert!(exploded.is_empty());
    }

    #[test]
    fn test_multi_feature_without_id_fails_loudly() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "MultiPoint", "coordinates": [[1.0, 2.0]] }
        }))
        .expect("fixture should deserialize");
        let result = explode(feature);
        assert!(
            matches!(result, Err(CotripError::MissingStationId(_))),
            "derived ids from a missing parent id would be corrupt"
        );
    }

    // --- Pass-through -------------------------------------------------------

    #[test]
    fn test_point_feature_passes_through_unchanged() {
        let feature = feature_with_geometry(
            "S1",
            json!({ "type": "Point", "coordinates": [1.0, 2.0] }),
        );
        let expected = feature.clone();

        let exploded = explode(feature).expect("single-part feature should pass through");
        assert_eq!(exploded, vec![expected]);
    }

    #[test]
    fn test_polygon_feature_passes_through_unchanged() {
        let feature = feature_with_geometry(
            "S1",
            json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
            }),
        );
        let expected = feature.clone();
        let exploded = explode(feature).expect("single-part feature should pass through");
        assert_eq!(exploded, vec![expected]);
    }

    #[test]
    fn test_geometry_collection_passes_through() {
        // "GeometryCollection" does not start with "Multi": not exploded.
        let feature = feature_with_geometry(
            "S1",
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Point", "coordinates": [1.0, 2.0] },
                    { "type": "Point", "coordinates": [3.0, 4.0] }
                ]
            }),
        );
        let expected = feature.clone();
        let exploded = explode(feature).expect("geometry collection should pass through");
        assert_eq!(exploded, vec![expected]);
    }

    #[test]
    fn test_feature_without_geometry_passes_through() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "id": "S1",
            "properties": { "type": "a-f-G" },
            "geometry": null
        }))
        .expect("fixture should deserialize");
        let expected = feature.clone();
        let exploded = explode(feature).expect("geometry-less feature should pass through");
        assert_eq!(exploded, vec![expected]);
    }

    #[test]
    fn test_pass_through_does_not_require_an_id() {
        // Only multi-part features need a parent id for derivation.
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0] }
        }))
        .expect("fixture should deserialize");
        let exploded = explode(feature).expect("single-part feature needs no id");
        assert_eq!(exploded.len(), 1);
    }
}
