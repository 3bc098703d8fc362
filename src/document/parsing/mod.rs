//! Document parsing utilities
//!
//! This module contains the line recognizers and the parsing stages that
//! turn generated text into a [`DocumentStructure`](super::models::DocumentStructure).

pub(crate) mod body;
pub(crate) mod cursor;
pub(crate) mod ending;
pub(crate) mod recognizers;
