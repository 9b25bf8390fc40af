//! Shared UI components for the Dioxus fullstack web UI.

pub mod card;
pub mod field;
pub mod form;
pub mod layout;
pub mod list;
pub mod nav;
pub mod theme;

pub use card::RecordCard;
pub use field::FormField;
pub use form::RecordForm;
pub use layout::Layout;
pub use list::RecordList;
pub use nav::Nav;
pub use theme::ThemeSwitcher;
