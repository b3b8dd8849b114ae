//! # DER Transport Signatures
//!
//! Conversion between the wallet-native raw `R‖S` signature format and the
//! two-integer DER SEQUENCE encoding the chain consumes.
//!
//! DER integers are signed: a component whose most-significant bit is set
//! must be prefixed with a zero byte or it would be read as negative. The
//! conversion is lossless in both directions.

use crate::errors::CodecError;

/// DER SEQUENCE tag.
const TAG_SEQUENCE: u8 = 0x30;
/// DER INTEGER tag.
const TAG_INTEGER: u8 = 0x02;

/// Convert a raw 64-byte `R‖S` signature (two 32-byte big-endian unsigned
/// integers) into the DER transport encoding.
pub fn to_transport_signature(raw: &[u8]) -> Result<Vec<u8>, CodecError> {
    if raw.len() != 64 {
        return Err(CodecError::InvalidLength { got: raw.len() });
    }

    let r = pad_component(&raw[..32]);
    let s = pad_component(&raw[32..]);

    if r.len() < 32 || r.len() > 33 {
        return Err(CodecError::InvalidComponentLength {
            component: "R",
            len: r.len(),
        });
    }
    if s.len() < 32 || s.len() > 33 {
        return Err(CodecError::InvalidComponentLength {
            component: "S",
            len: s.len(),
        });
    }

    // Both component lengths fit in a single short-form length byte.
    let mut der = Vec::with_capacity(6 + r.len() + s.len());
    der.push(TAG_SEQUENCE);
    der.push((4 + r.len() + s.len()) as u8);
    der.push(TAG_INTEGER);
    der.push(r.len() as u8);
    der.extend_from_slice(&r);
    der.push(TAG_INTEGER);
    der.push(s.len() as u8);
    der.extend_from_slice(&s);
    Ok(der)
}

/// Parse a DER transport signature back into the raw `(R, S)` pair.
pub fn parse_transport_signature(der: &[u8]) -> Result<([u8; 32], [u8; 32]), CodecError> {
    if der.len() < 8 {
        return Err(CodecError::MalformedSignature("too short".into()));
    }
    if der[0] != TAG_SEQUENCE {
        return Err(CodecError::MalformedSignature("missing SEQUENCE tag".into()));
    }
    let body_len = der[1] as usize;
    if body_len + 2 != der.len() {
        return Err(CodecError::MalformedSignature(format!(
            "declared length {} does not match body",
            body_len
        )));
    }

    let (r, rest) = read_integer(&der[2..])?;
    let (s, rest) = read_integer(rest)?;
    if !rest.is_empty() {
        return Err(CodecError::MalformedSignature("trailing bytes".into()));
    }
    Ok((r, s))
}

/// Prefix a zero byte when the component's MSB is set, so the DER integer
/// reads as unsigned.
fn pad_component(component: &[u8]) -> Vec<u8> {
    if component[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(component.len() + 1);
        padded.push(0x00);
        padded.extend_from_slice(component);
        padded
    } else {
        component.to_vec()
    }
}

/// Read one DER INTEGER and return its 32-byte big-endian value and the
/// remaining bytes.
fn read_integer(buf: &[u8]) -> Result<([u8; 32], &[u8]), CodecError> {
    if buf.len() < 2 {
        return Err(CodecError::MalformedSignature("truncated INTEGER".into()));
    }
    if buf[0] != TAG_INTEGER {
        return Err(CodecError::MalformedSignature("missing INTEGER tag".into()));
    }
    let len = buf[1] as usize;
    if len == 0 || len > 33 {
        return Err(CodecError::MalformedSignature(format!(
            "INTEGER length {} outside 1..=33",
            len
        )));
    }
    if buf.len() < 2 + len {
        return Err(CodecError::MalformedSignature("truncated INTEGER body".into()));
    }
    let body = &buf[2..2 + len];

    // Strip the sign byte; the remainder must fit in 32 bytes.
    let value = if body.len() == 33 {
        if body[0] != 0x00 {
            return Err(CodecError::MalformedSignature(
                "33-byte INTEGER without zero sign byte".into(),
            ));
        }
        &body[1..]
    } else {
        body
    };

    let mut out = [0u8; 32];
    out[32 - value.len()..].copy_from_slice(value);
    Ok((out, &buf[2 + len..]))
}
