//! Domain services used by HTTP routes.

pub mod equipment;
