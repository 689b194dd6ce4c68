pub(crate) mod cursor;
pub(crate) mod error;
pub(crate) mod parser;
pub(crate) mod source;
pub(crate) mod table;
