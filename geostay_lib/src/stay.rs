use geo_types::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single recorded stay. `position` is stored as (x = longitude, y = latitude).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    /// 1-based stop number, in input order.
    pub number: usize,
    pub position: Point,
    pub fields: Map<String, Value>,
}

impl Stay {
    pub fn new(number: usize, latitude: f64, longitude: f64, fields: Map<String, Value>) -> Self {
        Self {
            number,
            position: Point::new(longitude, latitude),
            fields,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    pub fn longitude(&self) -> f64 {
        self.position.x()
    }

    pub fn lat_lng(&self) -> (f64, f64) {
        (self.latitude(), self.longitude())
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[test]
fn position_is_lng_lat() {
    let stay = Stay::new(1, 48.1, 11.5, Map::new());
    assert_eq!(stay.position.x(), 11.5);
    assert_eq!(stay.position.y(), 48.1);
    assert_eq!(stay.lat_lng(), (48.1, 11.5));
}
