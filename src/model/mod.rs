//! Record types and the schema that drives the generic list and form views.

pub mod form;
pub mod product;
pub mod user;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use form::{FieldKind, FieldSpec, FieldValue, FormError, FormMode, FormValues};
pub use product::{Product, ProductPayload};
pub use user::{NewUser, User, UserChanges};

/// A record kind managed through the REST backend.
///
/// One implementation per kind is all the list and form views need: the
/// collection path, display labels, form fields, payload construction and
/// card rendering all come from here.
pub trait Resource: Clone + PartialEq + std::fmt::Debug + DeserializeOwned + 'static {
    /// Payload sent with POST
    type Create: Serialize;
    /// Payload sent with PUT
    type Update: Serialize;

    /// Collection path segment, e.g. `products`
    const COLLECTION: &'static str;
    /// Singular display label, e.g. `Product`
    const LABEL: &'static str;

    fn id(&self) -> i64;

    /// Name shown in confirmations
    fn title(&self) -> &str;

    fn fields(mode: FormMode) -> Vec<FieldSpec>;

    /// Values of a fresh create form
    fn blank_form() -> FormValues;

    /// Values used to pre-fill the edit form
    fn to_form(&self) -> FormValues;

    fn create_payload(form: &FormValues) -> Result<Self::Create, FormError>;

    fn update_payload(form: &FormValues) -> Result<Self::Update, FormError>;

    fn card(&self) -> CardView;

    /// Lower-case plural used in headings and messages
    fn plural() -> &'static str {
        Self::COLLECTION
    }
}

/// Display model for a record card in a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardView {
    pub title: String,
    /// Initial shown in a round avatar
    pub avatar: Option<char>,
    pub subtitle: Option<String>,
    pub badge: Option<Badge>,
    pub body: Option<String>,
    /// Short facts rendered in a row (price, category)
    pub meta: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub label: &'static str,
    pub positive: bool,
}
