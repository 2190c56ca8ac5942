//! Property tests for value validation and secret handling.

#[path = "properties/names.rs"]
mod names;
#[path = "properties/secrets.rs"]
mod secrets;
