//! Models shared between the site backend and any client of its JSON API.

pub mod model;
pub mod requests;
