//! Read-only access to the studio's teachers.

pub mod controller;
pub mod router;
pub mod service;
