// Cargo only discovers top-level files in tests/; this target pulls the
// property suite in from its subdirectory.
#[path = "property/rewrite_properties.rs"]
mod rewrite_properties;
