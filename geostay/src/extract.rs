use geostay_lib::stay::Stay;
use serde_json::{Map, Value};

use crate::{json_path::JsonPath, json_type_name, GeostayError, GeostayResult};

pub const DEFAULT_LAT_KEY: &str = "location[0]";
pub const DEFAULT_LNG_KEY: &str = "location[1]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub lat_key: String,
    pub lng_key: String,
    /// Skip records whose coordinates cannot be extracted instead of failing the run.
    pub skip_invalid: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            lat_key: DEFAULT_LAT_KEY.into(),
            lng_key: DEFAULT_LNG_KEY.into(),
            skip_invalid: false,
        }
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn name(self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }

    fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.,
            Axis::Longitude => 180.,
        }
    }
}

/// Turn an array of stay records into numbered stays, keeping input order.
pub fn extract_stays(records: &Value, options: &ExtractOptions) -> GeostayResult<Vec<Stay>> {
    let records = records
        .as_array()
        .ok_or_else(|| GeostayError::NotAList(json_type_name(records)))?;

    let lat_path: JsonPath = options.lat_key.parse()?;
    let lng_path: JsonPath = options.lng_key.parse()?;

    let mut stays = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let index = i + 1;
        let coordinates = coordinate(record, &lat_path, Axis::Latitude)
            .and_then(|lat| Ok((lat, coordinate(record, &lng_path, Axis::Longitude)?)));

        let (lat, lng) = match coordinates {
            Ok(coordinates) => coordinates,
            Err(err) if options.skip_invalid => {
                tracing::warn!("Skipping stay {}: {}", index, err);
                continue;
            }
            Err(err) => {
                return Err(GeostayError::StayExtraction {
                    index,
                    source: Box::new(err),
                });
            }
        };

        let fields = record.as_object().cloned().unwrap_or_else(Map::new);
        stays.push(Stay::new(stays.len() + 1, lat, lng, fields));
    }

    if stays.is_empty() {
        return Err(GeostayError::EmptyCoordinates);
    }

    tracing::debug!("Extracted {} of {} records", stays.len(), records.len());
    Ok(stays)
}

fn coordinate(record: &Value, path: &JsonPath, axis: Axis) -> GeostayResult<f64> {
    let value = path.resolve(record)?;

    let not_numeric = || GeostayError::NotNumeric {
        key: path.to_string(),
        value: value.to_string(),
    };

    let degrees = match value {
        Value::Number(n) => n.as_f64().ok_or_else(not_numeric)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| not_numeric())?,
        _ => return Err(not_numeric()),
    };

    if !degrees.is_finite() || degrees.abs() > axis.limit() {
        return Err(GeostayError::OutOfRange {
            axis: axis.name(),
            value: degrees,
        });
    }

    Ok(degrees)
}
