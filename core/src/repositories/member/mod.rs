//! Member repository module.

mod r#trait;
pub use r#trait::MemberRepository;

mod memory;
pub use memory::InMemoryMemberRepository;
