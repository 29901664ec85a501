use eda_core::Ensemble;
use sha2::{Digest, Sha256};

/// Hashes the shape and little-endian bit patterns of an ensemble.
pub fn ensemble_hash(ensemble: &Ensemble) -> String {
    let mut hasher = Sha256::new();
    hasher.update((ensemble.len() as u64).to_le_bytes());
    hasher.update((ensemble.dim() as u64).to_le_bytes());
    for value in ensemble.as_slice() {
        hasher.update(value.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
