//! Routed Pages

mod create_location;
mod home;

pub use create_location::CreateLocation;
pub use home::Home;
