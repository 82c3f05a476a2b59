// Job search: the pluggable portal seam, the mock engine behind it, and its API handler.

pub mod handlers;
pub mod portal;
