//! Profile repository module.

mod r#trait;
pub use r#trait::ProfileRepository;

mod memory;
pub use memory::InMemoryProfileRepository;

#[cfg(test)]
mod tests;
