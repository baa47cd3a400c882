pub mod reader;
pub mod scan;
pub mod source;

pub use reader::ReadPrimitives;
pub use scan::{find_tag, find_tag_from};
pub use source::{LoadMode, MediaSource};
