pub mod data_source;
pub mod metadata;

pub use data_source::*;
pub use metadata::*;
