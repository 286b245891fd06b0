//! User lookup and self-service account deletion.

pub mod controller;
pub mod router;
pub mod service;
