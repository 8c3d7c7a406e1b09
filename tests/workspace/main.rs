#[path = "../support/mod.rs"]
mod support;

mod documents;
mod editing;
mod session;
