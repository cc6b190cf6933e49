use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use geostay_lib::{route::Route, stay::Stay};
use serde_json::json;

/// Stays as `Point` features followed by one `LineString` per segment.
pub fn route_to_geojson(stays: &[Stay], route: &Route) -> GeoJson {
    let points = stays.iter().map(stay_to_feature);

    let lines = route.segments.iter().zip(stays.windows(2)).map(|(segment, pair)| {
        let mut properties = JsonObject::new();
        properties.insert("from".into(), json!(segment.from));
        properties.insert("to".into(), json!(segment.to));
        properties.insert("distance_km".into(), json!(segment.distance_km));

        feature(
            Value::LineString(vec![
                vec![pair[0].longitude(), pair[0].latitude()],
                vec![pair[1].longitude(), pair[1].latitude()],
            ]),
            properties,
        )
    });

    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features: points.chain(lines).collect(),
        foreign_members: None,
    })
}

fn stay_to_feature(stay: &Stay) -> Feature {
    let mut properties = stay.fields.clone();
    properties.insert("number".into(), json!(stay.number));

    feature(Value::Point(vec![stay.longitude(), stay.latitude()]), properties)
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
