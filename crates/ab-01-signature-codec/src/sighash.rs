//! # Witness Signing Digest
//!
//! Computes the exact digest a co-signer must sign for a witness input,
//! following the segregated-witness signature-hash algorithm. The output
//! must match the consensus rule byte for byte or a wallet-produced
//! signature will not validate on-chain.

use crate::bytes::double_sha256;
use crate::errors::CodecError;
use crate::transaction::{write_var_int, ParsedTransaction};
use shared_types::Hash;

/// Base sighash mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SighashBase {
    /// Commit to all outputs.
    All,
    /// Commit to no outputs.
    None,
    /// Commit to the output paired with the signed input.
    Single,
}

/// Sighash type: base mode plus the anyone-can-pay flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SighashType {
    /// Base mode.
    pub base: SighashBase,
    /// When set, commit only to the signed input.
    pub anyone_can_pay: bool,
}

impl SighashType {
    /// `SIGHASH_ALL`, the default for cooperative signing.
    pub const ALL: SighashType = SighashType {
        base: SighashBase::All,
        anyone_can_pay: false,
    };

    /// Decode from the consensus byte.
    pub fn from_consensus(n: u32) -> Self {
        let base = match n & 0x1F {
            2 => SighashBase::None,
            3 => SighashBase::Single,
            _ => SighashBase::All,
        };
        SighashType {
            base,
            anyone_can_pay: n & 0x80 != 0,
        }
    }

    /// Encode to the consensus byte.
    pub fn to_consensus(self) -> u32 {
        let base = match self.base {
            SighashBase::All => 1,
            SighashBase::None => 2,
            SighashBase::Single => 3,
        };
        if self.anyone_can_pay {
            base | 0x80
        } else {
            base
        }
    }
}

/// Compute the witness signing digest for one input.
///
/// `prev_out_script` is the script code of the referenced output (without
/// a length prefix) and `prev_out_value` its value in satoshis.
pub fn witness_signing_digest(
    tx: &ParsedTransaction,
    input_index: usize,
    prev_out_script: &[u8],
    prev_out_value: u64,
    sighash_type: SighashType,
) -> Result<Hash, CodecError> {
    let input = tx
        .inputs
        .get(input_index)
        .ok_or(CodecError::InputIndexOutOfRange {
            index: input_index,
            inputs: tx.inputs.len(),
        })?;

    let zero = [0u8; 32];

    let hash_prevouts = if sighash_type.anyone_can_pay {
        zero
    } else {
        let mut buf = Vec::with_capacity(tx.inputs.len() * 36);
        for txin in &tx.inputs {
            txin.previous_output.serialize_into(&mut buf);
        }
        double_sha256(&buf)
    };

    let hash_sequence = if sighash_type.anyone_can_pay || sighash_type.base != SighashBase::All {
        zero
    } else {
        let mut buf = Vec::with_capacity(tx.inputs.len() * 4);
        for txin in &tx.inputs {
            buf.extend_from_slice(&txin.sequence.to_le_bytes());
        }
        double_sha256(&buf)
    };

    let hash_outputs = match sighash_type.base {
        SighashBase::All => {
            let mut buf = Vec::new();
            for txout in &tx.outputs {
                txout.serialize_into(&mut buf);
            }
            double_sha256(&buf)
        }
        SighashBase::Single if input_index < tx.outputs.len() => {
            let mut buf = Vec::new();
            tx.outputs[input_index].serialize_into(&mut buf);
            double_sha256(&buf)
        }
        _ => zero,
    };

    let mut preimage = Vec::with_capacity(156 + prev_out_script.len());
    preimage.extend_from_slice(&tx.version.to_le_bytes());
    preimage.extend_from_slice(&hash_prevouts);
    preimage.extend_from_slice(&hash_sequence);
    input.previous_output.serialize_into(&mut preimage);
    write_var_int(&mut preimage, prev_out_script.len() as u64);
    preimage.extend_from_slice(prev_out_script);
    preimage.extend_from_slice(&prev_out_value.to_le_bytes());
    preimage.extend_from_slice(&input.sequence.to_le_bytes());
    preimage.extend_from_slice(&hash_outputs);
    preimage.extend_from_slice(&tx.lock_time.to_le_bytes());
    preimage.extend_from_slice(&sighash_type.to_consensus().to_le_bytes());

    Ok(double_sha256(&preimage))
}
