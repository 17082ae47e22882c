//! Integration tests for wow-shopping-lists
//!
//! These tests run whole guide pages through the extraction pipeline, the
//! way the scraper sees them.

mod edge_cases;
mod guide_pages;
