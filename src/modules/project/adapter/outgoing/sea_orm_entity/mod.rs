pub mod properties;
pub mod property_translations;
