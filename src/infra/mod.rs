//! Side effects: timers, seed data and the simulated backend.

pub mod animation;
pub mod mock_api;
pub mod mock_data;
