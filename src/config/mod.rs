pub mod defs;
pub mod xml;
