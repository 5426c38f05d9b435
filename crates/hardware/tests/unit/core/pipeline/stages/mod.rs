

/// PC selection and IF/ID update.
pub mod fetch;
