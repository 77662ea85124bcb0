use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Fixed-size digest used as an opaque member/post identifier on-chain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checksum256([u8; 32]);

impl Checksum256 {
    /// Derive an identifier from a human-readable string, e.g. a chat username or message id
    pub fn hash(value: &str) -> Self {
        Checksum256(Sha256::digest(value.as_bytes()).into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Checksum256 {
    fn from(value: [u8; 32]) -> Self {
        Checksum256(value)
    }
}

impl FromStr for Checksum256 {
    type Err = eyre::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        hex::decode(value.trim_start_matches("0x"))
            .map_err(|_| eyre::eyre!("invalid hex string"))
            .and_then(|bytes| {
                if bytes.len() != 32 {
                    Err(eyre::eyre!("invalid digest length"))
                } else {
                    let mut inner = [0u8; 32];
                    inner.copy_from_slice(&bytes);
                    Ok(Checksum256(inner))
                }
            })
    }
}

impl Display for Checksum256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Checksum256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl Serialize for Checksum256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}
