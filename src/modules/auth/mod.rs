//! Login and signup.
//!
//! Both endpoints are public. A successful login returns a bearer token
//! that the rest of the API expects in the `Authorization` header.

pub mod controller;
pub mod router;
pub mod service;
