//! # Raw Transaction Decoder
//!
//! Decodes the wire serialization of a Bitcoin transaction, including the
//! segregated-witness marker/flag extension, into a [`ParsedTransaction`].
//!
//! The decoder is strict: short buffers, bad varints, inconsistent lengths
//! and trailing bytes are all rejected as [`CodecError::MalformedTransaction`].

use crate::errors::CodecError;
use shared_types::Hash;

/// Reference to a previous transaction output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutPoint {
    /// Transaction id in wire byte order.
    pub txid: Hash,
    /// Output index within that transaction.
    pub vout: u32,
}

impl OutPoint {
    /// Append the 36-byte wire serialization.
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.txid);
        buf.extend_from_slice(&self.vout.to_le_bytes());
    }
}

/// One transaction input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// The output being spent.
    pub previous_output: OutPoint,
    /// Unlock script (empty for native witness inputs).
    pub script_sig: Vec<u8>,
    /// Input sequence number.
    pub sequence: u32,
}

/// One transaction output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    /// Value in satoshis.
    pub value: u64,
    /// Lock script.
    pub script_pubkey: Vec<u8>,
}

impl TxOutput {
    /// Append the wire serialization (value, varint script length, script).
    pub fn serialize_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value.to_le_bytes());
        write_var_int(buf, self.script_pubkey.len() as u64);
        buf.extend_from_slice(&self.script_pubkey);
    }
}

/// A decoded transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedTransaction {
    /// Transaction version.
    pub version: u32,
    /// Inputs.
    pub inputs: Vec<TxInput>,
    /// Outputs.
    pub outputs: Vec<TxOutput>,
    /// Witness stacks, one per input, when the witness flag is present.
    pub witnesses: Vec<Vec<Vec<u8>>>,
    /// Lock time.
    pub lock_time: u32,
    /// Whether the serialization carried the witness marker/flag.
    pub has_witness: bool,
}

/// Decode a raw transaction from its hex serialization.
pub fn parse_transaction(raw_hex: &str) -> Result<ParsedTransaction, CodecError> {
    let s = raw_hex.strip_prefix("0x").unwrap_or(raw_hex);
    let bytes = hex::decode(s)
        .map_err(|_| CodecError::MalformedTransaction("transaction is not valid hex".into()))?;
    parse_transaction_bytes(&bytes)
}

/// Decode a raw transaction from its wire bytes.
pub fn parse_transaction_bytes(bytes: &[u8]) -> Result<ParsedTransaction, CodecError> {
    let mut reader = ByteReader::new(bytes);

    let version = reader.read_u32_le()?;

    // Segwit marker (0x00) cannot be a real input count, so it
    // unambiguously signals the extended serialization.
    let mut has_witness = false;
    let input_count = {
        let first = reader.read_var_int()?;
        if first == 0 {
            let flag = reader.read_u8()?;
            if flag != 0x01 {
                return Err(CodecError::MalformedTransaction(format!(
                    "unknown witness flag 0x{:02x}",
                    flag
                )));
            }
            has_witness = true;
            reader.read_var_int()?
        } else {
            first
        }
    };

    let input_count = check_count(input_count, reader.remaining(), 36 + 1 + 4)?;
    if input_count == 0 {
        return Err(CodecError::MalformedTransaction("no inputs".into()));
    }

    let mut inputs = Vec::with_capacity(input_count);
    for _ in 0..input_count {
        let mut txid = [0u8; 32];
        txid.copy_from_slice(reader.read_bytes(32)?);
        let vout = reader.read_u32_le()?;
        let script_len = reader.read_var_int()? as usize;
        let script_sig = reader.read_bytes(script_len)?.to_vec();
        let sequence = reader.read_u32_le()?;
        inputs.push(TxInput {
            previous_output: OutPoint { txid, vout },
            script_sig,
            sequence,
        });
    }

    let output_count = check_count(reader.read_var_int()?, reader.remaining(), 8 + 1)?;
    let mut outputs = Vec::with_capacity(output_count);
    for _ in 0..output_count {
        let value = reader.read_u64_le()?;
        let script_len = reader.read_var_int()? as usize;
        let script_pubkey = reader.read_bytes(script_len)?.to_vec();
        outputs.push(TxOutput {
            value,
            script_pubkey,
        });
    }

    let mut witnesses = Vec::new();
    if has_witness {
        for _ in 0..inputs.len() {
            let item_count = reader.read_var_int()? as usize;
            let mut stack = Vec::with_capacity(item_count.min(64));
            for _ in 0..item_count {
                let item_len = reader.read_var_int()? as usize;
                stack.push(reader.read_bytes(item_len)?.to_vec());
            }
            witnesses.push(stack);
        }
    }

    let lock_time = reader.read_u32_le()?;

    if reader.remaining() != 0 {
        return Err(CodecError::MalformedTransaction(format!(
            "{} trailing bytes",
            reader.remaining()
        )));
    }

    Ok(ParsedTransaction {
        version,
        inputs,
        outputs,
        witnesses,
        lock_time,
        has_witness,
    })
}

/// Append a Bitcoin varint.
pub fn write_var_int(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xFC => buf.push(n as u8),
        0xFD..=0xFFFF => {
            buf.push(0xFD);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xFFFF_FFFF => {
            buf.push(0xFE);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xFF);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Reject counts that could not possibly fit in the remaining buffer.
fn check_count(count: u64, remaining: usize, min_item_size: usize) -> Result<usize, CodecError> {
    let max = (remaining / min_item_size) as u64 + 1;
    if count > max {
        return Err(CodecError::MalformedTransaction(format!(
            "count {} exceeds buffer capacity",
            count
        )));
    }
    Ok(count as usize)
}

/// Forward-only reader over the raw bytes.
struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::MalformedTransaction(format!(
                "need {} bytes at offset {}, {} left",
                n,
                self.pos,
                self.remaining()
            )));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_u32_le(&mut self) -> Result<u32, CodecError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u64_le(&mut self) -> Result<u64, CodecError> {
        let bytes = self.read_bytes(8)?;
        let mut array = [0u8; 8];
        array.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(array))
    }

    fn read_var_int(&mut self) -> Result<u64, CodecError> {
        let first = self.read_u8()?;
        Ok(match first {
            0xFD => {
                let bytes = self.read_bytes(2)?;
                u16::from_le_bytes([bytes[0], bytes[1]]) as u64
            }
            0xFE => self.read_u32_le()? as u64,
            0xFF => self.read_u64_le()?,
            n => n as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal legacy transaction: one input, one output.
    fn legacy_tx_hex() -> String {
        let mut tx = Vec::new();
        tx.extend_from_slice(&1u32.to_le_bytes()); // version
        tx.push(1); // input count
        tx.extend_from_slice(&[0xAB; 32]); // prev txid
        tx.extend_from_slice(&0u32.to_le_bytes()); // vout
        tx.push(0); // empty script_sig
        tx.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes()); // sequence
        tx.push(1); // output count
        tx.extend_from_slice(&50_000u64.to_le_bytes()); // value
        tx.push(3); // script length
        tx.extend_from_slice(&[0x51, 0x52, 0x53]);
        tx.extend_from_slice(&0u32.to_le_bytes()); // locktime
        hex::encode(tx)
    }

    /// Same transaction in the extended witness serialization.
    fn witness_tx_hex() -> String {
        let mut tx = Vec::new();
        tx.extend_from_slice(&2u32.to_le_bytes());
        tx.push(0x00); // marker
        tx.push(0x01); // flag
        tx.push(1);
        tx.extend_from_slice(&[0xCD; 32]);
        tx.extend_from_slice(&1u32.to_le_bytes());
        tx.push(0);
        tx.extend_from_slice(&0xFFFF_FFFEu32.to_le_bytes());
        tx.push(1);
        tx.extend_from_slice(&25_000u64.to_le_bytes());
        tx.push(1);
        tx.push(0x6A);
        tx.push(2); // witness items for input 0
        tx.push(2);
        tx.extend_from_slice(&[0x30, 0x01]); // placeholder signature item
        tx.push(3);
        tx.extend_from_slice(&[0x02, 0xAA, 0xBB]); // placeholder pubkey item
        tx.extend_from_slice(&500_000u32.to_le_bytes()); // locktime
        hex::encode(tx)
    }

    #[test]
    fn test_parse_legacy_transaction() {
        let tx = parse_transaction(&legacy_tx_hex()).unwrap();
        assert_eq!(tx.version, 1);
        assert!(!tx.has_witness);
        assert_eq!(tx.inputs.len(), 1);
        assert_eq!(tx.inputs[0].previous_output.txid, [0xAB; 32]);
        assert_eq!(tx.inputs[0].sequence, 0xFFFF_FFFF);
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].value, 50_000);
        assert_eq!(tx.outputs[0].script_pubkey, vec![0x51, 0x52, 0x53]);
        assert_eq!(tx.lock_time, 0);
    }

    #[test]
    fn test_parse_witness_transaction() {
        let tx = parse_transaction(&witness_tx_hex()).unwrap();
        assert!(tx.has_witness);
        assert_eq!(tx.version, 2);
        assert_eq!(tx.witnesses.len(), 1);
        assert_eq!(tx.witnesses[0].len(), 2);
        assert_eq!(tx.witnesses[0][1], vec![0x02, 0xAA, 0xBB]);
        assert_eq!(tx.lock_time, 500_000);
    }

    #[test]
    fn test_parse_accepts_0x_prefix() {
        let tx = parse_transaction(&format!("0x{}", legacy_tx_hex())).unwrap();
        assert_eq!(tx.inputs.len(), 1);
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(matches!(
            parse_transaction("zz00"),
            Err(CodecError::MalformedTransaction(_))
        ));
    }

    #[test]
    fn test_rejects_truncated_buffer() {
        let full = legacy_tx_hex();
        let truncated = &full[..full.len() - 10];
        assert!(matches!(
            parse_transaction(truncated),
            Err(CodecError::MalformedTransaction(_))
        ));
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let padded = legacy_tx_hex() + "00";
        assert!(matches!(
            parse_transaction(&padded),
            Err(CodecError::MalformedTransaction(_))
        ));
    }

    #[test]
    fn test_rejects_bad_witness_flag() {
        let mut tx = Vec::new();
        tx.extend_from_slice(&2u32.to_le_bytes());
        tx.push(0x00);
        tx.push(0x02); // unknown flag
        assert!(matches!(
            parse_transaction_bytes(&tx),
            Err(CodecError::MalformedTransaction(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_count() {
        let mut tx = Vec::new();
        tx.extend_from_slice(&1u32.to_le_bytes());
        tx.push(0xFE); // 4-byte varint
        tx.extend_from_slice(&u32::MAX.to_le_bytes()); // absurd input count
        assert!(matches!(
            parse_transaction_bytes(&tx),
            Err(CodecError::MalformedTransaction(_))
        ));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(parse_transaction("").is_err());
    }

    #[test]
    fn test_var_int_round_trip_boundaries() {
        for n in [0u64, 0xFC, 0xFD, 0xFFFF, 0x1_0000, 0xFFFF_FFFF, u64::MAX] {
            let mut buf = Vec::new();
            write_var_int(&mut buf, n);
            let mut reader = ByteReader::new(&buf);
            assert_eq!(reader.read_var_int().unwrap(), n);
            assert_eq!(reader.remaining(), 0);
        }
    }

    #[test]
    fn test_output_serialization() {
        let output = TxOutput {
            value: 600_000_000,
            script_pubkey: vec![0x00, 0x14],
        };
        let mut buf = Vec::new();
        output.serialize_into(&mut buf);
        assert_eq!(&buf[..8], &600_000_000u64.to_le_bytes());
        assert_eq!(buf[8], 2);
        assert_eq!(&buf[9..], &[0x00, 0x14]);
    }
}
