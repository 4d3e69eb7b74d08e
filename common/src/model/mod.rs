pub mod document;
pub mod fields;
pub mod invoice;
