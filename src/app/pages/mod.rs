//! Page components, one per route.

mod home;
mod not_found;
mod products;
mod users;

pub use home::Home;
pub use not_found::NotFound;
pub use products::{ProductEdit, ProductNew, Products};
pub use users::{UserEdit, UserNew, Users};
