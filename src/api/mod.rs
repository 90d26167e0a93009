//! Diary service API module.
//!
//! This module provides:
//! - Session login against the diary service
//! - Authenticated calendar and post page fetches
//! - Image retrieval from the storage backend

pub mod client;

pub use client::{check_image_response, validate_login_response, DiaryClient};
