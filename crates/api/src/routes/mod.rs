//! Route Handlers

pub mod risks;
