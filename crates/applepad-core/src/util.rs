use crate::params::NormalizedParams;
use sha2::{Digest, Sha256};

/// Stable short id for a generation request, used to name saved images.
pub fn request_fingerprint(style: &str, params: &NormalizedParams) -> String {
    let mut hasher = Sha256::new();
    hasher.update(style.as_bytes());
    for (key, value) in params.iter() {
        hasher.update(key.as_str().as_bytes());
        hasher.update(value.to_le_bytes());
    }
    let digest = hex::encode(hasher.finalize());
    digest[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_tracks_style_and_params() {
        let p = NormalizedParams::splat(0.3);
        let a = request_fingerprint("Japandi", &p);
        assert_eq!(a, request_fingerprint("Japandi", &p));
        assert_ne!(a, request_fingerprint("Scandinavian", &p));
        assert_ne!(a, request_fingerprint("Japandi", &NormalizedParams::splat(0.31)));
        assert_eq!(a.len(), 12);
    }
}
