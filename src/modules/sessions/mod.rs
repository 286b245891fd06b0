//! Yoga sessions and participation.
//!
//! Any authenticated user may create, edit and delete sessions, and join or
//! leave one on behalf of any user id.

pub mod controller;
pub mod mapper;
pub mod router;
pub mod service;
