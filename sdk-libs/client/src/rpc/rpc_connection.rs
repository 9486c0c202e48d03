use std::fmt::Debug;

use async_trait::async_trait;
use solana_sdk::{account::Account, hash::Hash, pubkey::Pubkey};

use crate::rpc::errors::RpcError;

/// Connection to a ledger node.
///
/// Every method issues at most one outbound request and resolves with the
/// node's answer; nothing is retried or cached here. Dropping the returned
/// future cancels the in-flight request without leaving partial state behind.
#[async_trait]
pub trait RpcConnection: Send + Sync + Debug {
    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError>;

    /// Returns `None` when the account does not exist on the ledger.
    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError>;

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError>;
}
