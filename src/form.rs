//! Location Form State
//!
//! Everything the create-location page edits, kept free of browser types so
//! the handlers and payload assembly can be tested natively.

use crate::models::{ContactField, ContactFields, MapPosition, UnknownField};

/// Discrete form events, applied one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    MapClick(MapPosition),
    FieldChange { name: String, value: String },
    ToggleItem(u32),
}

/// Where the submit button stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Submitting,
    /// Last submit failed; the form stays editable
    Failed(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Contact fields, map position and selected item ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationForm {
    pub contact: ContactFields,
    pub position: MapPosition,
    pub selected_items: Vec<u32>,
}

impl LocationForm {
    pub fn handle_map_click(&mut self, position: MapPosition) {
        self.position = position;
    }

    /// Merge one named input into the contact fields
    pub fn handle_input_change(&mut self, name: &str, value: String) -> Result<(), UnknownField> {
        let field = name.parse::<ContactField>()?;
        self.contact.set(field, value);
        Ok(())
    }

    /// Add `id` if absent, remove it if present
    pub fn handle_select_item(&mut self, id: u32) {
        if self.is_selected(id) {
            self.selected_items.retain(|&selected| selected != id);
        } else {
            self.selected_items.push(id);
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_items.contains(&id)
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<(), UnknownField> {
        match event {
            FormEvent::MapClick(position) => self.handle_map_click(position),
            FormEvent::FieldChange { name, value } => self.handle_input_change(&name, value)?,
            FormEvent::ToggleItem(id) => self.handle_select_item(id),
        }
        Ok(())
    }

    /// Snapshot the form into the multipart parts sent to `POST locations`
    pub fn payload<F>(&self, image: Option<F>) -> LocationPayload<F> {
        let items = self
            .selected_items
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let fields = vec![
            ("name", self.contact.name.clone()),
            ("email", self.contact.email.clone()),
            ("whatsapp", self.contact.whatsapp.clone()),
            ("uf", self.contact.uf.clone()),
            ("city", self.contact.city.clone()),
            ("latitude", coordinate(self.position.latitude)),
            ("longitude", coordinate(self.position.longitude)),
            ("items", items),
        ];

        LocationPayload { fields, image }
    }
}

/// Decimal coordinate text; `-0` is sent as `0`
fn coordinate(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Text parts in send order plus the optional image part
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPayload<F> {
    pub fields: Vec<(&'static str, String)>,
    pub image: Option<F>,
}

impl<F> LocationPayload<F> {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_form() -> LocationForm {
        let mut form = LocationForm::default();
        form.handle_input_change("name", "Acme".to_string()).unwrap();
        form.handle_input_change("email", "a@b.com".to_string()).unwrap();
        form.handle_input_change("whatsapp", "123".to_string()).unwrap();
        form.handle_input_change("city", "Porto Alegre".to_string()).unwrap();
        form.handle_input_change("uf", "RS".to_string()).unwrap();
        form.handle_map_click(MapPosition { latitude: -29.95, longitude: -51.08 });
        form
    }

    #[test]
    fn test_toggle_parity() {
        let mut form = LocationForm::default();
        let toggles = [1, 2, 1, 3, 2, 2, 4, 4, 4];
        for id in toggles {
            form.handle_select_item(id);
        }

        for id in 1..=5 {
            let count = toggles.iter().filter(|&&t| t == id).count();
            assert_eq!(form.is_selected(id), count % 2 == 1, "id {}", id);
        }
        // No duplicates survive toggling
        assert_eq!(form.selected_items, vec![3, 2, 4]);
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let mut form = LocationForm::default();
        form.handle_select_item(5);
        form.handle_select_item(1);
        form.handle_select_item(3);
        form.handle_select_item(1);

        assert_eq!(form.selected_items, vec![5, 3]);
    }

    #[test]
    fn test_input_change_touches_one_field() {
        let mut form = acme_form();
        let before = form.contact.clone();

        form.handle_input_change("city", "Canoas".to_string()).unwrap();

        assert_eq!(form.contact.city, "Canoas");
        assert_eq!(form.contact.name, before.name);
        assert_eq!(form.contact.email, before.email);
        assert_eq!(form.contact.whatsapp, before.whatsapp);
        assert_eq!(form.contact.uf, before.uf);
    }

    #[test]
    fn test_unknown_input_name_leaves_form_unchanged() {
        let mut form = acme_form();
        let before = form.clone();

        let result = form.handle_input_change("phone", "555".to_string());

        assert_eq!(result, Err(UnknownField("phone".to_string())));
        assert_eq!(form, before);
    }

    #[test]
    fn test_map_click_overwrites_position() {
        let mut form = LocationForm::default();
        assert_eq!(form.position, MapPosition { latitude: 0.0, longitude: 0.0 });

        form.handle_map_click(MapPosition { latitude: 10.5, longitude: 20.25 });
        form.handle_map_click(MapPosition { latitude: -29.95, longitude: -51.08 });

        assert_eq!(form.position, MapPosition { latitude: -29.95, longitude: -51.08 });
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut form = LocationForm::default();
        form.apply(FormEvent::ToggleItem(7)).unwrap();
        form.apply(FormEvent::FieldChange { name: "uf".to_string(), value: "SC".to_string() }).unwrap();
        form.apply(FormEvent::MapClick(MapPosition { latitude: 1.0, longitude: 2.0 })).unwrap();

        assert!(form.is_selected(7));
        assert_eq!(form.contact.uf, "SC");
        assert_eq!(form.position, MapPosition { latitude: 1.0, longitude: 2.0 });
        assert!(form.apply(FormEvent::FieldChange { name: "zip".to_string(), value: String::new() }).is_err());
    }

    #[test]
    fn test_payload_without_image() {
        let mut form = acme_form();
        form.handle_select_item(1);
        form.handle_select_item(3);

        let payload = form.payload::<()>(None);

        assert_eq!(payload.field("items"), Some("1,3"));
        assert_eq!(payload.field("latitude"), Some("-29.95"));
        assert_eq!(payload.field("longitude"), Some("-51.08"));
        assert_eq!(payload.field("name"), Some("Acme"));
        assert_eq!(payload.field("uf"), Some("RS"));
        assert_eq!(payload.field("image"), None);
        assert!(payload.image.is_none());

        let order: Vec<_> = payload.fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, ["name", "email", "whatsapp", "uf", "city", "latitude", "longitude", "items"]);
    }

    #[test]
    fn test_payload_with_image() {
        let payload = acme_form().payload(Some("logo.png"));
        assert_eq!(payload.image, Some("logo.png"));
    }

    #[test]
    fn test_payload_empty_selection() {
        let payload = LocationForm::default().payload::<()>(None);

        assert_eq!(payload.field("items"), Some(""));
        assert_eq!(payload.field("latitude"), Some("0"));
        assert_eq!(payload.field("longitude"), Some("0"));
    }

    #[test]
    fn test_payload_negative_zero_coordinate() {
        let mut form = LocationForm::default();
        form.handle_map_click(MapPosition { latitude: -0.0, longitude: 0.0 });

        let payload = form.payload::<()>(None);

        assert_eq!(payload.field("latitude"), Some("0"));
        assert_eq!(payload.field("longitude"), Some("0"));
    }

    #[test]
    fn test_toggle_on_empty_catalog() {
        // Nothing was fetched, so no id is backed by an item
        let mut form = LocationForm::default();
        form.handle_select_item(42);
        form.handle_select_item(42);

        assert!(form.selected_items.is_empty());
    }

    #[test]
    fn test_submit_status() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Editing);
        assert!(SubmitStatus::Submitting.is_submitting());
        assert_eq!(SubmitStatus::Failed("HTTP 500".to_string()).error(), Some("HTTP 500"));
        assert_eq!(SubmitStatus::Editing.error(), None);
    }
}
