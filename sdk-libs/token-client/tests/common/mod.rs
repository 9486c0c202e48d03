use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use solana_sdk::{account::Account, hash::Hash, pubkey::Pubkey};
use veil_client::{
    indexer::{
        CompressedProof, CompressedTokenAccount, GetCompressedTokenAccountsOptions,
        Hash as AccountHash, Indexer, IndexerError, TokenData, TreeContext,
        ValidityProofWithContext,
    },
    rpc::{RpcConnection, RpcError},
};

/// In-memory ledger double. Counts collaborator calls so tests can assert
/// which external requests a flow did (or did not) issue.
#[derive(Debug, Default)]
pub struct MockLedger {
    pub blockhash: Hash,
    pub accounts: Mutex<HashMap<Pubkey, Account>>,
    pub notes: Mutex<Vec<CompressedTokenAccount>>,
    pub root_seq: AtomicU64,
    /// Simulates a state-tree update landing right after the account read,
    /// so the proof is generated against a newer root.
    pub advance_root_after_read: bool,
    pub proof_requests: Mutex<Vec<Vec<AccountHash>>>,
    pub account_lookups: AtomicUsize,
    pub blockhash_requests: AtomicUsize,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            root_seq: AtomicU64::new(1),
            ..Default::default()
        }
    }

    pub fn with_notes(notes: Vec<CompressedTokenAccount>) -> Self {
        let ledger = Self::new();
        *ledger.notes.lock().unwrap() = notes;
        ledger
    }

    pub fn insert_account(&self, address: Pubkey, owner: Pubkey) {
        self.accounts.lock().unwrap().insert(
            address,
            Account {
                lamports: 2_039_280,
                data: vec![0u8; 165],
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub fn proof_request_count(&self) -> usize {
        self.proof_requests.lock().unwrap().len()
    }
}

pub fn note(owner: Pubkey, mint: Pubkey, amount: u64, hash: u8) -> CompressedTokenAccount {
    CompressedTokenAccount {
        token: TokenData { mint, owner, amount },
        hash: [hash; 32],
        tree_context: TreeContext {
            merkle_tree: Pubkey::new_from_array([200u8; 32]),
            nullifier_queue: Pubkey::new_from_array([201u8; 32]),
            leaf_index: hash as u32,
            root_seq: 0, // stamped with the current root at read time
        },
    }
}

#[async_trait]
impl RpcConnection for MockLedger {
    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        self.blockhash_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.blockhash)
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        self.account_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.lock().unwrap().get(&address).cloned())
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .get(pubkey)
            .map(|account| account.lamports)
            .unwrap_or_default())
    }
}

#[async_trait]
impl Indexer for MockLedger {
    async fn get_compressed_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        options: Option<GetCompressedTokenAccountsOptions>,
    ) -> Result<Vec<CompressedTokenAccount>, IndexerError> {
        let mint = options.and_then(|options| options.mint);
        let root_seq = self.root_seq.load(Ordering::SeqCst);
        let accounts = self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|note| note.token.owner == *owner)
            .filter(|note| mint.map_or(true, |mint| note.token.mint == mint))
            .map(|note| {
                let mut note = *note;
                note.tree_context.root_seq = root_seq;
                note
            })
            .collect();
        if self.advance_root_after_read {
            self.root_seq.fetch_add(1, Ordering::SeqCst);
        }
        Ok(accounts)
    }

    async fn get_validity_proof(
        &self,
        hashes: Vec<AccountHash>,
    ) -> Result<ValidityProofWithContext, IndexerError> {
        let root_indices = (0..hashes.len() as u16).collect();
        self.proof_requests.lock().unwrap().push(hashes);
        Ok(ValidityProofWithContext {
            proof: CompressedProof::default(),
            root_indices,
            root_seq: self.root_seq.load(Ordering::SeqCst),
        })
    }
}
