use crate::entities::QueryHash;
use sha2::{Digest, Sha256};

/// Trims surrounding whitespace and converts to lower case.
pub fn normalize_address(address: &str) -> String {
    address.trim().to_lowercase()
}

/// Computes the cache key of an already normalized address.
///
/// Hex encoded SHA-256 digest of the UTF-8 bytes.
pub fn fingerprint(normalized_address: &str) -> QueryHash {
    let mut hasher = Sha256::new();
    hasher.update(normalized_address.as_bytes());
    hex::encode(hasher.finalize()).into()
}

/// Normalizes the address and computes its cache key.
pub fn address_fingerprint(address: &str) -> (String, QueryHash) {
    let normalized = normalize_address(address);
    let hash = fingerprint(&normalized);
    (normalized, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!("main st", normalize_address(" Main St "));
        assert_eq!("main st", normalize_address("\tMAIN ST\n"));
        assert_eq!("av. san martín 1200", normalize_address("Av. San MARTÍN 1200"));
        assert_eq!("", normalize_address("   "));
    }

    #[test]
    fn sha256_hex_digest() {
        assert_eq!(
            "44e24a9d002a923dc64679433313f11b9ce3c5cabed13f8983872fd99f87d504",
            fingerprint("main st").as_str()
        );
        assert_eq!(
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            fingerprint("").as_str()
        );
        assert_eq!(
            "e30c4ba683109ec52f70a95d13dac808a1ad02a084ea9d92289e5f719665e552",
            address_fingerprint(" Av. San Martín 1200").1.as_str()
        );
    }

    #[test]
    fn insensitive_to_case_and_surrounding_whitespace() {
        let (_, a) = address_fingerprint(" Main St ");
        let (_, b) = address_fingerprint("main st");
        let (_, c) = address_fingerprint("MAIN ST");
        assert_eq!(a, b);
        assert_eq!(b, c);
        let (_, d) = address_fingerprint("main  st");
        assert_ne!(a, d);
    }
}
