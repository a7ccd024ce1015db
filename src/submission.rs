//! Point Submission
//!
//! Snapshot of the form taken when the user submits, flattened into the
//! multipart text fields expected by `POST /points`.

use crate::models::{AttachedImage, ContactForm, Coordinates};

/// Everything sent to the backend for one collection point
#[derive(Debug, Clone, PartialEq)]
pub struct PointSubmission {
    pub contact: ContactForm,
    pub uf: String,
    pub city: String,
    pub position: Coordinates,
    /// Item ids in selection order
    pub items: Vec<u32>,
    pub image: Option<AttachedImage>,
}

impl PointSubmission {
    /// Comma-joined item ids, e.g. `"1,4,2"`
    pub fn items_field(&self) -> String {
        self.items
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Text parts of the multipart body, in wire order
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.contact.name.clone()),
            ("email", self.contact.email.clone()),
            ("whatsapp", self.contact.whatsapp.clone()),
            ("uf", self.uf.clone()),
            ("city", self.city.clone()),
            ("latitude", self.position.latitude.to_string()),
            ("longitude", self.position.longitude.to_string()),
            ("items", self.items_field()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_submission(items: Vec<u32>) -> PointSubmission {
        PointSubmission {
            contact: ContactForm {
                name: "Mercado do Zé".to_string(),
                email: "ze@mercado.com".to_string(),
                whatsapp: "11999990000".to_string(),
            },
            uf: "SP".to_string(),
            city: "Campinas".to_string(),
            position: Coordinates::new(-22.9056, -47.0608),
            items,
            image: None,
        }
    }

    #[test]
    fn test_items_field_keeps_selection_order() {
        assert_eq!(make_submission(vec![3, 1, 2]).items_field(), "3,1,2");
        assert_eq!(make_submission(vec![2]).items_field(), "2");
        assert_eq!(make_submission(vec![]).items_field(), "");
    }

    #[test]
    fn test_text_fields_order_and_format() {
        let fields = make_submission(vec![1, 2]).text_fields();
        let names: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            ["name", "email", "whatsapp", "uf", "city", "latitude", "longitude", "items"]
        );
        assert_eq!(fields[5].1, "-22.9056");
        assert_eq!(fields[6].1, "-47.0608");
        assert_eq!(fields[7].1, "1,2");
    }

    #[test]
    fn test_zero_coordinates_format_like_integers() {
        let mut submission = make_submission(vec![]);
        submission.position = Coordinates::new(0.0, 0.0);
        let fields = submission.text_fields();
        assert_eq!(fields[5].1, "0");
        assert_eq!(fields[6].1, "0");
    }
}
