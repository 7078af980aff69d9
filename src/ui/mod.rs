mod output;

pub use output::{
    display_answer, display_markers, display_thinking, display_tool_error, display_tool_result,
};
