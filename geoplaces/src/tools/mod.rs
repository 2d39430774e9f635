pub mod export;
pub mod import;
pub mod repair;
pub mod translate;
