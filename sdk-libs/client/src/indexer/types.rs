use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

pub type Hash = [u8; 32];

/// Token-specific payload of a compressed account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenData {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Location of a compressed account in the state tree, captured at the time
/// the account was read from the indexer.
///
/// `root_seq` is the sequence number of the tree root the indexer served
/// this view from; a validity proof is only usable together with accounts
/// read at the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeContext {
    pub merkle_tree: Pubkey,
    pub nullifier_queue: Pubkey,
    pub leaf_index: u32,
    pub root_seq: u64,
}

/// One unspent compressed-token note. Immutable once fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressedTokenAccount {
    pub token: TokenData,
    pub hash: Hash,
    pub tree_context: TreeContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenBalance {
    pub mint: Pubkey,
    pub balance: u64,
}

/// Groth16 proof blob, embedded in instructions as-is.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CompressedProof {
    pub a: [u8; 32],
    pub b: [u8; 64],
    pub c: [u8; 32],
}

impl Default for CompressedProof {
    fn default() -> Self {
        Self {
            a: [0u8; 32],
            b: [0u8; 64],
            c: [0u8; 32],
        }
    }
}

/// Validity proof for a set of compressed accounts.
///
/// `root_indices` line up 1:1 with the hashes the proof was requested for.
/// The proof attests inclusion at root sequence `root_seq` and is stale as
/// soon as the accounts it covers were read from a different sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityProofWithContext {
    pub proof: CompressedProof,
    pub root_indices: Vec<u16>,
    pub root_seq: u64,
}
