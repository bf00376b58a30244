pub mod authenticated;
pub mod validated_json;

pub use authenticated::Authenticated;
pub use validated_json::ValidatedJson;
