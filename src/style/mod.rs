pub(crate) mod config;
pub(crate) mod filters;
pub(crate) mod resolver;
