// Server-rendered pages for the job search UI.

pub mod handlers;
pub mod templates;
