use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Photo {
    pub height: u32,
    pub width: u32,
    pub photo_reference: String,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Typed view of a place details `result` object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlaceDetailsResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub adr_address: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Minutes from UTC.
    #[serde(default)]
    pub utc_offset: Option<i32>,
    #[serde(default)]
    pub vicinity: Option<String>,
}

/// The details `result` object exactly as the endpoint returned it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct PlaceDetails(Map<String, Value>);

impl PlaceDetails {
    pub fn new(result: Map<String, Value>) -> Self {
        Self(result)
    }

    pub fn place_id(&self) -> Option<&str> {
        self.0.get("place_id").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// `geometry.location`, present with the default `fields=geometry`.
    pub fn location(&self) -> Option<LatLng> {
        let location = self.0.get("geometry")?.get("location")?;
        Some(LatLng {
            lat: location.get("lat")?.as_f64()?,
            lng: location.get("lng")?.as_f64()?,
        })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn to_typed(&self) -> Result<PlaceDetailsResult, serde_json::Error> {
        PlaceDetailsResult::deserialize(Value::Object(self.0.clone()))
    }
}
