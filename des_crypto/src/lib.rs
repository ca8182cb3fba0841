pub mod crypto;

pub use crypto::des::Des;
pub use crypto::error::CipherError;
