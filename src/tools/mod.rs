mod details;
mod geocode;
mod nearby;
pub mod places;
mod registry;
mod text_search;

pub use places::PlacesClient;
pub use registry::{ToolExecutor, ToolKind, ToolRegistry, PLACE_TYPES};
