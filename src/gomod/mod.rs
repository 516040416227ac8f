pub mod decoder;
pub mod module;
pub mod version;

pub use decoder::decode_modules;
pub use module::Module;
pub use version::UpdateKind;
