pub mod model;
pub mod picker;
pub mod requests;
