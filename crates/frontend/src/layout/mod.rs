pub mod global_context;
pub mod tabs;
pub mod top_header;
