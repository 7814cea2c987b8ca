//! Token hashing.
//!
//! Each content unit carries a domain-separated BLAKE3 digest of its token.
//! The domain tag keeps token kinds in disjoint hash spaces, so a text
//! character can never collide with a structural boundary marker. The engine
//! still backs hash equality with an exact token compare, so even an
//! in-domain collision cannot produce a wrong diff.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sequence::Token;

const CHAR_DOMAIN: &[u8] = b"snapline-char-v1";
const NODE_DOMAIN: &[u8] = b"snapline-node-v1";

/// Content-derived fingerprint of a single token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitHash([u8; 32]);

impl UnitHash {
    /// Create a `UnitHash` from a pre-computed digest.
    pub fn from_hash(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// The raw 32-byte digest.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for UnitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitHash({})", self.short_hex())
    }
}

impl fmt::Display for UnitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hash one token with domain separation.
pub fn hash_token(token: &Token) -> UnitHash {
    let mut hasher = blake3::Hasher::new();
    match token {
        Token::Char(c) => {
            hasher.update(CHAR_DOMAIN);
            hasher.update(b":");
            let mut buf = [0u8; 4];
            hasher.update(c.encode_utf8(&mut buf).as_bytes());
        }
        Token::Open(kind) => {
            hasher.update(NODE_DOMAIN);
            hasher.update(b":");
            let mut encoded = Vec::with_capacity(2);
            kind.encode(&mut encoded);
            hasher.update(&encoded);
        }
    }
    UnitHash::from_hash(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn hashing_is_deterministic() {
        let a = hash_token(&Token::Char('x'));
        let b = hash_token(&Token::Char('x'));
        assert_eq!(a, b);
    }

    #[test]
    fn different_chars_hash_differently() {
        assert_ne!(hash_token(&Token::Char('a')), hash_token(&Token::Char('b')));
    }

    #[test]
    fn domains_are_separated() {
        // A char and a boundary must never share a hash, whatever their bytes.
        let char_hash = hash_token(&Token::Char('\0'));
        let node_hash = hash_token(&Token::Open(NodeKind::Paragraph));
        assert_ne!(char_hash, node_hash);
    }

    #[test]
    fn heading_levels_hash_differently() {
        let h1 = hash_token(&Token::Open(NodeKind::Heading { level: 1 }));
        let h2 = hash_token(&Token::Open(NodeKind::Heading { level: 2 }));
        assert_ne!(h1, h2);
    }

    #[test]
    fn multibyte_chars_are_supported() {
        let a = hash_token(&Token::Char('é'));
        let b = hash_token(&Token::Char('è'));
        assert_ne!(a, b);
    }

    #[test]
    fn short_hex_is_8_chars() {
        let hash = hash_token(&Token::Char('x'));
        assert_eq!(hash.short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let hash = hash_token(&Token::Char('x'));
        assert_eq!(format!("{hash}").len(), 64);
    }
}
