pub mod filter_option;
pub mod search;
pub mod suggestion;
