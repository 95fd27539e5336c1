use super::RoadCategory;
use geo::{Distance, Haversine, LineString, Point};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

/// a (latitude, longitude) pair in decimal degrees.
pub type LatLon = (f64, f64);

/// a classified road produced by a single detection pass. one record per
/// qualifying OSM way.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoadSegment {
    pub osm_id: String,
    pub highway_type: String,
    pub category: RoadCategory,
    /// consecutive duplicates removed, always at least two points
    pub coordinates: Vec<LatLon>,
    /// resolved carriageway width in meters
    pub width: f64,
    #[serde(default)]
    pub name: Option<String>,
    /// the complete tag set of the source way
    pub tags: IndexMap<String, String>,
    /// sort key, lower is processed first
    pub priority: u32,
}

impl RoadSegment {
    pub fn start(&self) -> Option<LatLon> {
        self.coordinates.first().copied()
    }

    pub fn end(&self) -> Option<LatLon> {
        self.coordinates.last().copied()
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// geometry with x = longitude, y = latitude.
    pub fn line_string(&self) -> LineString<f64> {
        self.coordinates
            .iter()
            .map(|(lat, lon)| (*lon, *lat))
            .collect::<Vec<_>>()
            .into()
    }

    /// great-circle length along the segment.
    pub fn length(&self) -> Length {
        let meters: f64 = self
            .coordinates
            .windows(2)
            .map(|pair| {
                let (lat0, lon0) = pair[0];
                let (lat1, lon1) = pair[1];
                Haversine.distance(Point::new(lon0, lat0), Point::new(lon1, lat1))
            })
            .sum();
        Length::new::<meter>(meters)
    }

    /// true when traffic flows in a single direction, either from an explicit
    /// `oneway` tag or implied for motorways and roundabouts.
    pub fn is_oneway(&self) -> bool {
        match self.tag("oneway") {
            Some("yes") | Some("true") | Some("1") | Some("-1") => true,
            Some("no") | Some("false") | Some("0") => false,
            _ => self.highway_type == "motorway" || self.tag("junction") == Some("roundabout"),
        }
    }
}
