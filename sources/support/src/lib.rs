pub mod bytes_ext;
pub mod name;
