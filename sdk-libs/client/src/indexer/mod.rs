pub mod http_indexer;

mod base58;
mod error;
mod options;
mod types;

use std::fmt::Debug;

use async_trait::async_trait;
pub use base58::Base58Conversions;
pub use error::IndexerError;
pub use http_indexer::{HttpIndexer, IndexerConfig};
pub use options::GetCompressedTokenAccountsOptions;
use solana_sdk::pubkey::Pubkey;
pub use types::{
    CompressedProof, CompressedTokenAccount, Hash, TokenBalance, TokenData, TreeContext,
    ValidityProofWithContext,
};

/// Read access to the compressed-account indexer.
///
/// The indexer observes the state trees and serves point-in-time views of the
/// unspent compressed accounts together with validity proofs against the tree
/// root it indexed last.
#[async_trait]
pub trait Indexer: Send + Sync + Debug {
    /// All unspent compressed token accounts held by `owner`, optionally
    /// narrowed down to a single mint.
    async fn get_compressed_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        options: Option<GetCompressedTokenAccountsOptions>,
    ) -> Result<Vec<CompressedTokenAccount>, IndexerError>;

    /// Requests a validity proof for the given account hashes.
    ///
    /// The request carries each hash exactly once, and the returned
    /// `root_indices` line up positionally with the request; consumers embed
    /// them in spend instructions in the same order.
    async fn get_validity_proof(
        &self,
        hashes: Vec<Hash>,
    ) -> Result<ValidityProofWithContext, IndexerError>;
}
