pub mod counters;
pub mod data_registry;
pub mod hero;
pub mod registry;
pub mod teamup;
pub mod validate;
