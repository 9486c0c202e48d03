use crate::indexer::error::IndexerError;

pub trait Base58Conversions {
    fn to_base58(&self) -> String;
    fn from_base58(s: &str) -> Result<Self, IndexerError>
    where
        Self: Sized;
}

impl Base58Conversions for [u8; 32] {
    fn to_base58(&self) -> String {
        bs58::encode(self).into_string()
    }

    fn from_base58(s: &str) -> Result<Self, IndexerError> {
        decode_base58_to_fixed_array(s)
    }
}

pub fn decode_base58_to_fixed_array<const N: usize>(s: &str) -> Result<[u8; N], IndexerError> {
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|e| IndexerError::decode_error("base58", e))?;
    bytes.try_into().map_err(|v: Vec<u8>| {
        IndexerError::decode_error(
            "base58",
            format!("expected {} bytes, got {}", N, v.len()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_round_trip() {
        let bytes = [7u8; 32];
        let encoded = bytes.to_base58();
        let decoded = <[u8; 32]>::from_base58(&encoded).unwrap();
        assert_eq!(bytes, decoded);
    }

    #[test]
    fn test_base58_wrong_length() {
        let encoded = bs58::encode([1u8; 16]).into_string();
        assert!(<[u8; 32]>::from_base58(&encoded).is_err());
    }

    #[test]
    fn test_base58_invalid_characters() {
        assert!(<[u8; 32]>::from_base58("not-base58-0OIl").is_err());
    }
}
