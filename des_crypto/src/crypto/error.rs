use thiserror::Error;

/// Errors a single-block transform can surface to its caller.
///
/// `Format` covers malformed caller input (bad hex, wrong bit width).
/// `Configuration` means a permutation table constant is corrupted; it
/// is a build defect and only ever reported by startup validation,
/// never by a per-call data path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("format error: {0}")]
    Format(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}
