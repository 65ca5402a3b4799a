//! Frontend Models
//!
//! Data structures matching the collection-point API.

use std::fmt;
use std::str::FromStr;

use leaflet_map::LatLng;
use serde::{Deserialize, Serialize};

/// Recyclable item category from the catalog (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// Contact and address fields typed into the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub city: String,
    pub uf: String,
}

impl ContactFields {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Whatsapp => &mut self.whatsapp,
            ContactField::City => &mut self.city,
            ContactField::Uf => &mut self.uf,
        };
        *slot = value;
    }
}

/// Input names the form knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
    City,
    Uf,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Whatsapp,
        ContactField::City,
        ContactField::Uf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Whatsapp => "whatsapp",
            ContactField::City => "city",
            ContactField::Uf => "uf",
        }
    }
}

/// Input name that matches none of the contact fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Point picked on the map; `(0, 0)` until the user clicks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LatLng> for MapPosition {
    fn from(ll: LatLng) -> Self {
        Self { latitude: ll.lat, longitude: ll.lng }
    }
}

impl From<MapPosition> for LatLng {
    fn from(pos: MapPosition) -> Self {
        LatLng::new(pos.latitude, pos.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_catalog_json() {
        let json = r#"[
            {"id": 1, "title": "Lâmpadas", "image_url": "http://localhost:3333/uploads/lampadas.svg"},
            {"id": 2, "title": "Pilhas e Baterias", "image_url": "http://localhost:3333/uploads/baterias.svg"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].title, "Pilhas e Baterias");
    }

    #[test]
    fn test_contact_field_names() {
        for field in ContactField::ALL {
            assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
        }
        assert_eq!("phone".parse::<ContactField>(), Err(UnknownField("phone".to_string())));
    }

    #[test]
    fn test_contact_fields_set() {
        let mut contact = ContactFields::default();
        contact.set(ContactField::Uf, "RS".to_string());

        assert_eq!(contact.uf, "RS");
        assert_eq!(contact.city, "");
    }

    #[test]
    fn test_map_position_lat_lng_conversion() {
        let pos = MapPosition::from(LatLng::new(-29.95, -51.08));
        assert_eq!(pos.latitude, -29.95);
        assert_eq!(pos.longitude, -51.08);
        assert_eq!(LatLng::from(pos), LatLng::new(-29.95, -51.08));
    }
}
