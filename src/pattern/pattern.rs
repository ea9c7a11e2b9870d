// Tue Jan 20 2026 - Alex

use crate::pattern::PatternError;
use std::fmt;

/// The byte sequence being searched for. Emptiness is representable here;
/// it is rejected once, by the matcher or the driver, not per constructor.
#[derive(Debug, Clone)]
pub struct Pattern {
    bytes: Vec<u8>,
    name: Option<String>,
}

impl Pattern {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            name: None,
        }
    }

    /// UTF-8 text pattern, the common case when hunting for strings.
    pub fn from_text(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
            name: None,
        }
    }

    /// Whitespace-separated two-digit hex bytes, e.g. "48 8B 05". Wildcard
    /// tokens are not accepted; every byte must be literal.
    pub fn from_hex(hex: &str) -> Result<Self, PatternError> {
        let mut bytes = Vec::new();

        for part in hex.split_whitespace() {
            if part.len() != 2 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(PatternError::InvalidHex(part.to_string()));
            }
            let byte = u8::from_str_radix(part, 16)
                .map_err(|_| PatternError::InvalidHex(part.to_string()))?;
            bytes.push(byte);
        }

        Ok(Self { bytes, name: None })
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.name {
            write!(f, "{}: ", name)?;
        }
        write!(f, "{}", self.to_hex_string())
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Pattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_from_text() {
        let pat = Pattern::from_text("abc");
        assert_eq!(pat.bytes(), b"abc");
        assert_eq!(pat.len(), 3);
    }

    #[test]
    fn test_pattern_from_hex() {
        let pat = Pattern::from_hex("48 8b 05 DE").unwrap();
        assert_eq!(pat.bytes(), &[0x48, 0x8b, 0x05, 0xde]);
        assert_eq!(pat.to_hex_string(), "48 8B 05 DE");
    }

    #[test]
    fn test_pattern_from_hex_rejects_bad_tokens() {
        assert_eq!(
            Pattern::from_hex("48 ?? 05"),
            Err(PatternError::InvalidHex("??".to_string()))
        );
        assert_eq!(
            Pattern::from_hex("4"),
            Err(PatternError::InvalidHex("4".to_string()))
        );
        assert_eq!(
            Pattern::from_hex("zz"),
            Err(PatternError::InvalidHex("zz".to_string()))
        );
    }

    #[test]
    fn test_pattern_display() {
        let pat = Pattern::from_bytes(&[0xde, 0xad]).with_name("marker");
        assert_eq!(pat.to_string(), "marker: DE AD");
        assert_eq!(pat.name(), Some("marker"));
    }

    #[test]
    fn test_pattern_equality_ignores_name() {
        let a = Pattern::from_bytes(b"ab").with_name("a");
        let b = Pattern::from_bytes(b"ab");
        assert_eq!(a, b);
    }
}
