pub mod error;
pub mod firebase_config;
pub mod health;
pub mod security;
pub mod tags;
