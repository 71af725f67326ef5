pub mod api;
pub mod error;
pub mod model;
pub mod nav;
pub mod scale;
pub mod store;
