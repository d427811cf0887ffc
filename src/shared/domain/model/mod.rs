pub mod enums;
pub mod value_objects;
