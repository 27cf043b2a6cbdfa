//! Resolution of `(type, hex)` pairs into [`GlobalStateKey`]s.

use shared_crypto::blake3_hash_many;

use super::errors::KeyError;
use super::key::{GlobalStateKey, KeyType, KEY_LENGTH};

/// Separator between the seed and the remainder of a local key.
pub const LOCAL_SEPARATOR: char = ':';

/// Resolve `hex_value` into a key of the type named by `key_type`.
///
/// `key_type` is matched case-insensitively. Hex is taken as-is, without
/// `0x` stripping.
pub fn resolve_key(key_type: &str, hex_value: &str) -> Result<GlobalStateKey, KeyError> {
    let key = match key_type.parse::<KeyType>()? {
        KeyType::Hash => GlobalStateKey::Hash(decode_fixed(hex_value, "key")?),
        KeyType::URef => GlobalStateKey::URef(decode_fixed(hex_value, "key")?),
        KeyType::Address => GlobalStateKey::Address(decode_fixed(hex_value, "key")?),
        KeyType::Local => GlobalStateKey::Local(local_digest(hex_value)?),
    };
    Ok(key)
}

/// Digest of a `{seed}:{rest}` pair: BLAKE3(seed ++ rest).
pub fn local_digest(hex_value: &str) -> Result<[u8; KEY_LENGTH], KeyError> {
    let mut segments = hex_value.split(LOCAL_SEPARATOR);
    let (seed, rest) = match (segments.next(), segments.next(), segments.next()) {
        (Some(seed), Some(rest), None) => (seed, rest),
        _ => return Err(KeyError::malformed_local(hex_value)),
    };

    let seed: [u8; KEY_LENGTH] = decode_fixed(seed, "local seed")?;
    let rest = hex::decode(rest).map_err(|e| KeyError::invalid_hex(rest, e))?;

    Ok(blake3_hash_many(&[&seed[..], &rest[..]]))
}

fn decode_fixed(value: &str, what: &str) -> Result<[u8; KEY_LENGTH], KeyError> {
    let bytes = hex::decode(value).map_err(|e| KeyError::invalid_hex(value, e))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| KeyError::invalid_length(what, KEY_LENGTH, len))
}
