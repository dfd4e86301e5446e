// Degree-plan generation engine.
// Template loading parses labels once; the resolver and packer are pure and
// synchronous. Only plan lookup touches the database.

pub mod handlers;
pub mod packer;
pub mod repository;
pub mod requirement;
pub mod resolver;
pub mod service;
pub mod template;
