pub mod style;
pub mod template;

pub use style::{normalize_extension, BlockDelimiters, CommentStyle, ExtensionPolicy};
pub use template::HeaderTemplate;
