// Autocomplete: static job/location stores and the filters applied to them.

pub mod filter;
pub mod handlers;
pub mod store;
