//! HTTP handlers

pub mod health;
pub mod incidents;
pub mod dashboard;
pub mod threat;
pub mod summary;
pub mod feeds;
pub mod data;
