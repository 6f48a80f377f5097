//! Menu published by the ordering backend.

pub mod entities;
