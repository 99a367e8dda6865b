pub mod element;
pub mod escape;
pub mod event;
pub mod layout;
pub mod page;
pub mod render;
pub mod types;

pub use element::{closest, contains, find_element, path_to, query_class, Content, Element};
pub use escape::{escape_attr, escape_text};
pub use event::Event;
pub use layout::Rect;
pub use page::Document;
pub use render::{inner_html, to_html};
pub use types::*;
