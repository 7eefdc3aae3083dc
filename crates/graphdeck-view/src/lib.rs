pub mod metadata;
pub mod tree;
pub mod view;

pub use metadata::MetadataRetriever;
pub use tree::{DataSourceTree, MetadataCategory, NodeId, NodePayload};
pub use view::{DataSourcesView, Renderer};
