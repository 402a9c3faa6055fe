//! Binary configuration format
//!
//! Configurations are stored as postcard-serialized bytes so a hardware
//! layer can keep the last used program in flash or EEPROM.

use super::types::ProgramConfiguration;

/// Largest encoded configuration, in bytes
///
/// Two enum discriminants and a bool, each a single varint byte.
pub const MAX_ENCODED_LEN: usize = 3;

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small
    BufferTooSmall,
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
}

impl ProgramConfiguration {
    /// Encode into `buf`, returning the used prefix
    pub fn encode<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|e| match e {
            postcard::Error::SerializeBufferFull => ConfigError::BufferTooSmall,
            _ => ConfigError::Serialize,
        })
    }

    /// Decode from bytes produced by [`encode`](Self::encode)
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}
