mod enums;
mod style;

pub use enums::{Cursor, Display, Position, TextAlign};
pub use style::Style;
