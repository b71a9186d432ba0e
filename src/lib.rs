//! Client library for a property-search backend: validated search
//! criteria submitted as query parameters, an opaque result set toggled
//! between form and results views, and a review lookup per listing.

pub mod api;
pub mod config;
pub mod models;
pub mod session;
