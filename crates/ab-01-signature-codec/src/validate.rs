//! # Input Validators
//!
//! Pure predicates for the values users paste into dispute forms:
//! Bitcoin addresses, secp256k1 public keys, and transaction hashes.
//! Predicates never panic and never allocate on the failure path more
//! than decoding requires.

use crate::bytes::double_sha256;
use k256::elliptic_curve::sec1::FromEncodedPoint;
use k256::{AffinePoint, EncodedPoint};

const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Base58check version bytes accepted for mainnet/testnet P2PKH and P2SH.
const BASE58_VERSIONS: [u8; 4] = [0x00, 0x05, 0x6F, 0xC4];

const BECH32_CONST: u32 = 1;
const BECH32M_CONST: u32 = 0x2bc8_30a3;

/// Check whether a string is a valid Bitcoin address: base58check
/// (P2PKH/P2SH) or bech32/bech32m (witness programs).
pub fn is_valid_address(address: &str) -> bool {
    if address.is_empty() {
        return false;
    }
    is_valid_base58_address(address) || is_valid_bech32_address(address)
}

/// Check whether bytes are a well-formed secp256k1 public key: 33 bytes
/// with an 0x02/0x03 prefix or 65 bytes with an 0x04 prefix, and an
/// x-coordinate that decodes to a point on the curve.
pub fn is_valid_public_key(bytes: &[u8]) -> bool {
    match (bytes.len(), bytes.first()) {
        (33, Some(0x02 | 0x03)) | (65, Some(0x04)) => {}
        _ => return false,
    }

    let encoded = match EncodedPoint::from_bytes(bytes) {
        Ok(e) => e,
        Err(_) => return false,
    };
    let point = AffinePoint::from_encoded_point(&encoded);
    point.is_some().into()
}

/// Check whether a string is a 64-character hex transaction hash.
pub fn is_valid_tx_hash(hash: &str) -> bool {
    hash.len() == 64 && hash.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_valid_base58_address(address: &str) -> bool {
    let payload = match base58_decode(address) {
        Some(p) => p,
        None => return false,
    };
    if payload.len() != 25 {
        return false;
    }
    if !BASE58_VERSIONS.contains(&payload[0]) {
        return false;
    }
    let checksum = double_sha256(&payload[..21]);
    checksum[..4] == payload[21..]
}

fn base58_decode(s: &str) -> Option<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::new();
    for c in s.bytes() {
        let digit = BASE58_ALPHABET.iter().position(|&a| a == c)? as u32;
        let mut carry = digit;
        for b in bytes.iter_mut().rev() {
            carry += (*b as u32) * 58;
            *b = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }
    let zeros = s.bytes().take_while(|&c| c == b'1').count();
    let mut out = vec![0u8; zeros];
    out.extend(bytes);
    Some(out)
}

fn is_valid_bech32_address(address: &str) -> bool {
    // Mixed case is invalid by definition.
    let has_lower = address.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = address.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return false;
    }
    let address = address.to_ascii_lowercase();

    let sep = match address.rfind('1') {
        Some(p) => p,
        None => return false,
    };
    let (hrp, data_part) = (&address[..sep], &address[sep + 1..]);
    if hrp != "bc" && hrp != "tb" {
        return false;
    }
    if data_part.len() < 7 {
        return false;
    }

    let mut data = Vec::with_capacity(data_part.len());
    for c in data_part.bytes() {
        match BECH32_CHARSET.iter().position(|&a| a == c) {
            Some(v) => data.push(v as u8),
            None => return false,
        }
    }

    let mut values: Vec<u8> = hrp.bytes().map(|b| b >> 5).collect();
    values.push(0);
    values.extend(hrp.bytes().map(|b| b & 0x1F));
    values.extend_from_slice(&data);

    let witness_version = data[0];
    let expected = match witness_version {
        0 => BECH32_CONST,
        1..=16 => BECH32M_CONST,
        _ => return false,
    };
    if bech32_polymod(&values) != expected {
        return false;
    }

    let program = match convert_bits_5_to_8(&data[1..data.len() - 6]) {
        Some(p) => p,
        None => return false,
    };
    if program.len() < 2 || program.len() > 40 {
        return false;
    }
    // Witness v0 programs are exactly a pubkey hash or a script hash.
    witness_version != 0 || program.len() == 20 || program.len() == 32
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GEN: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];
    let mut chk: u32 = 1;
    for &v in values {
        let b = chk >> 25;
        chk = ((chk & 0x01FF_FFFF) << 5) ^ (v as u32);
        for (i, g) in GEN.iter().enumerate() {
            if (b >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

fn convert_bits_5_to_8(data: &[u8]) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    let mut out = Vec::with_capacity(data.len() * 5 / 8);
    for &v in data {
        acc = (acc << 5) | v as u32;
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    // Incomplete groups must be zero padding only.
    if bits >= 5 || (acc << (8 - bits)) & 0xFF != 0 {
        return None;
    }
    Some(out)
}
