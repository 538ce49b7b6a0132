pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod file;
pub mod memory;

pub use file::FileKeyRepository;
pub use memory::InMemoryKeyRepository;
pub use r#trait::KeyRepository;
