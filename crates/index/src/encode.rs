use crate::error::{IndexError, Result};

/// Binary form of an embedding vector in the layout the index expects:
/// little-endian f32, 4 bytes per element, concatenated in order, no
/// padding or length prefix.
///
/// Lives only for the duration of one query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedVector {
    bytes: Vec<u8>,
}

impl EncodedVector {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte length, always `4 * dimension()`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of f32 elements encoded in this blob.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.bytes.len() / 4
    }
}

/// Encodes an embedding vector into the index's binary blob layout.
///
/// Pure and deterministic: identical input always yields identical bytes.
/// Rejects empty vectors and non-finite elements; the index would only
/// reject them later with a less useful error.
pub fn encode(vector: &[f32]) -> Result<EncodedVector> {
    if vector.is_empty() {
        return Err(IndexError::EmptyVector);
    }
    if let Some((index, &value)) = vector.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(IndexError::NonFiniteElement { index, value });
    }

    let mut bytes = Vec::with_capacity(vector.len() * 4);
    for value in vector {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    Ok(EncodedVector { bytes })
}

/// Decodes a blob produced by [`encode`] back into f32 elements.
pub fn decode(encoded: &EncodedVector) -> Vec<f32> {
    encoded
        .bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_produces_four_bytes_per_element() {
        let encoded = encode(&[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(encoded.len(), 16);
        assert_eq!(encoded.dimension(), 4);
    }

    #[test]
    fn encode_is_little_endian_in_element_order() {
        let encoded = encode(&[1.0, -2.0]).unwrap();
        let mut expected = 1.0f32.to_le_bytes().to_vec();
        expected.extend_from_slice(&(-2.0f32).to_le_bytes());
        assert_eq!(encoded.as_bytes(), expected.as_slice());
    }

    #[test]
    fn encode_round_trips_exactly() {
        let vector = vec![0.0, -0.0, 1.5, f32::MIN, f32::MAX, 3.141_592_7];
        let encoded = encode(&vector).unwrap();
        assert_eq!(decode(&encoded), vector);
    }

    #[test]
    fn encode_is_deterministic() {
        let vector = [0.25, 0.5, 0.75];
        assert_eq!(encode(&vector).unwrap(), encode(&vector).unwrap());
    }

    #[test]
    fn encode_rejects_empty_vector() {
        assert!(matches!(encode(&[]), Err(IndexError::EmptyVector)));
    }

    #[test]
    fn encode_rejects_nan() {
        let err = encode(&[0.1, f32::NAN]).unwrap_err();
        assert!(matches!(err, IndexError::NonFiniteElement { index: 1, .. }));
    }

    #[test]
    fn encode_rejects_infinity() {
        let err = encode(&[f32::INFINITY]).unwrap_err();
        assert!(matches!(err, IndexError::NonFiniteElement { index: 0, .. }));
    }
}
