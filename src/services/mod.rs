//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on request validation and auth plumbing.

pub mod catalog;
pub mod customer;
pub mod order;
pub mod password;
pub mod session;
pub mod token;
