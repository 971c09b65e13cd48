use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

/// Default length of generated name fragments.
pub const DEFAULT_RANDOM_LEN: usize = 40;

/// The OS random byte source failed. Fatal; there is no fallback source.
#[derive(Debug, Error)]
#[error("random byte source failed: {0}")]
pub struct RandomSourceError(String);

/// Generate `length` random alphanumeric characters from the OS CSPRNG.
///
/// Base64 expands and then loses characters to the alphanumeric strip, so
/// raw bytes are drawn in rounds until the requested length is reached.
/// The output length is exact regardless of encoding overhead.
pub fn random_alphanumeric(length: usize) -> Result<String, RandomSourceError> {
    let mut out = String::with_capacity(length);

    while out.len() < length {
        let remaining = length - out.len();
        let mut bytes = vec![0u8; remaining.max(8)];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| RandomSourceError(err.to_string()))?;

        out.extend(
            STANDARD
                .encode(&bytes)
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .take(remaining),
        );
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generates_exact_length() {
        for length in [0, 1, 7, 30, DEFAULT_RANDOM_LEN, 100] {
            let name = random_alphanumeric(length).unwrap();
            assert_eq!(name.len(), length);
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn names_do_not_collide() {
        let mut seen = HashSet::new();
        for _ in 0..100_000 {
            let name = random_alphanumeric(30).unwrap();
            assert!(seen.insert(name), "generated a duplicate 30-char name");
        }
    }
}
