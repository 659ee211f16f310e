pub mod handlers;
pub mod models;
pub mod skill_match;
