mod message;
mod place;
mod tool;

pub use message::{Message, Role};
pub use place::{GeocodeResult, LatLng, Place, PlaceDetails, PlaceList, ReverseGeocodeResult};
pub use tool::{FunctionCall, ToolCall, ToolResult};
