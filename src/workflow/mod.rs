pub mod conversion;
pub mod definition;
pub mod document;
pub mod palette;
pub mod template;

pub use conversion::*;
pub use definition::*;
pub use palette::*;
pub use template::*;
