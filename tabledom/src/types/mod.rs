mod class;
mod enums;

pub use class::ClassList;
pub use enums::*;
