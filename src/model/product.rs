//! Product records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::form::{format_price, join_tags, parse_non_negative, parse_tags};
use super::{Badge, CardView, FieldKind, FieldSpec, FormError, FormMode, FormValues, Resource};

/// A product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

fn default_in_stock() -> bool {
    true
}

/// Body of product create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub in_stock: bool,
}

impl ProductPayload {
    fn from_form(form: &FormValues) -> Result<Self, FormError> {
        Ok(Self {
            name: form.text("name").to_string(),
            description: form.text("description").to_string(),
            price: parse_non_negative(form.text("price"), "Price")?,
            category: form.text("category").to_string(),
            tags: parse_tags(form.text("tags")),
            in_stock: form.flag("in_stock"),
        })
    }
}

impl Resource for Product {
    type Create = ProductPayload;
    type Update = ProductPayload;

    const COLLECTION: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn fields(_mode: FormMode) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", "Product Name", FieldKind::Text)
                .required()
                .placeholder("Enter product name"),
            FieldSpec::new("description", "Description", FieldKind::TextArea)
                .required()
                .placeholder("Enter product description"),
            FieldSpec::new(
                "price",
                "Price (USD)",
                FieldKind::Number {
                    step: "0.01",
                    min: "0",
                },
            )
            .required()
            .placeholder("0.00"),
            FieldSpec::new("category", "Category", FieldKind::Text)
                .required()
                .placeholder("e.g., Electronics"),
            FieldSpec::new("tags", "Tags (comma-separated)", FieldKind::Text)
                .placeholder("e.g., premium, wireless, audio"),
            FieldSpec::new("in_stock", "In Stock", FieldKind::Checkbox),
        ]
    }

    fn blank_form() -> FormValues {
        FormValues::new()
            .with_text("name", "")
            .with_text("description", "")
            .with_text("price", "")
            .with_text("category", "")
            .with_text("tags", "")
            .with_flag("in_stock", true)
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with_text("name", self.name.clone())
            .with_text("description", self.description.clone())
            .with_text("price", self.price.to_string())
            .with_text("category", self.category.clone())
            .with_text("tags", join_tags(&self.tags))
            .with_flag("in_stock", self.in_stock)
    }

    fn create_payload(form: &FormValues) -> Result<ProductPayload, FormError> {
        ProductPayload::from_form(form)
    }

    fn update_payload(form: &FormValues) -> Result<ProductPayload, FormError> {
        ProductPayload::from_form(form)
    }

    fn card(&self) -> CardView {
        CardView {
            title: self.name.clone(),
            avatar: None,
            subtitle: None,
            badge: Some(if self.in_stock {
                Badge {
                    label: "In Stock",
                    positive: true,
                }
            } else {
                Badge {
                    label: "Out of Stock",
                    positive: false,
                }
            }),
            body: Some(self.description.clone()),
            meta: vec![format_price(self.price), self.category.clone()],
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product {
            id: 3,
            name: "Desk Lamp".to_string(),
            description: "Warm light".to_string(),
            price: 24.5,
            category: "Lighting".to_string(),
            tags: vec!["home".to_string(), "led".to_string()],
            in_stock: false,
            created_at: None,
        }
    }

    #[test]
    fn test_deserialize_backend_product_with_naive_timestamp() {
        let json = r#"{
            "id": 1,
            "name": "Test Product",
            "description": "Test Description",
            "price": 99.99,
            "category": "Test Category",
            "tags": ["test", "sample"],
            "in_stock": true,
            "created_at": "2024-05-01T10:15:30.123456"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.tags, vec!["test", "sample"]);
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_deserialize_minimal_product_uses_defaults() {
        let json = r#"{"id":2,"name":"M","description":"D","price":5,"category":"C"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.tags.is_empty());
        assert!(product.in_stock);
        assert!(product.created_at.is_none());
    }

    #[test]
    fn test_payload_from_form_parses_price_and_tags() {
        let form = Product::blank_form()
            .with_text("name", "Headphones")
            .with_text("description", "Over-ear")
            .with_text("price", "149.9")
            .with_text("category", "Audio")
            .with_text("tags", "a, b ,, c");

        let payload = Product::create_payload(&form).unwrap();
        assert_eq!(payload.price, 149.9);
        assert_eq!(payload.tags, vec!["a", "b", "c"]);
        assert!(payload.in_stock);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["a", "b", "c"]));
        assert_eq!(json["in_stock"], true);
    }

    #[test]
    fn test_payload_rejects_unparseable_price() {
        let form = Product::blank_form().with_text("price", "cheap");
        assert_eq!(
            Product::update_payload(&form),
            Err(FormError::InvalidNumber { label: "Price" })
        );
    }

    #[test]
    fn test_to_form_prefills_edit_values() {
        let form = lamp().to_form();
        assert_eq!(form.text("name"), "Desk Lamp");
        assert_eq!(form.text("price"), "24.5");
        assert_eq!(form.text("tags"), "home, led");
        assert!(!form.flag("in_stock"));

        let payload = Product::update_payload(&form).unwrap();
        assert_eq!(payload.tags, lamp().tags);
    }

    #[test]
    fn test_card_shows_price_and_stock_badge() {
        let card = lamp().card();
        assert_eq!(card.meta, vec!["$24.50", "Lighting"]);
        assert_eq!(
            card.badge,
            Some(Badge {
                label: "Out of Stock",
                positive: false
            })
        );
        assert_eq!(card.tags.len(), 2);
    }

    #[test]
    fn test_blank_form_defaults_in_stock() {
        assert!(Product::blank_form().flag("in_stock"));
        assert_eq!(Product::blank_form().text("price"), "");
    }
}
