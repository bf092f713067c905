pub mod avatar;
pub mod style;

pub use avatar::{CustomizationRequest, GenerationResult, ValidCustomization};
pub use style::StyleTag;
