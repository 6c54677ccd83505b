pub mod blacklist;
pub mod errors;
