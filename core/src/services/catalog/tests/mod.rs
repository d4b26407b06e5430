//! Tests for catalog seeding

mod uploader_tests;
