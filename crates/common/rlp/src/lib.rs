pub mod constants;
pub mod encode;
pub mod structs;
