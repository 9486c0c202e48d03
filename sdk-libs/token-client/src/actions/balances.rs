use solana_sdk::pubkey::Pubkey;
use veil_client::indexer::{Indexer, TokenBalance};

use crate::{balance::aggregate_token_balances, error::Result};

/// Canonical per-mint balance view for `owner`: fetches the owner's
/// compressed token accounts and collapses them into one entry per mint.
pub async fn get_compressed_token_balances<I: Indexer>(
    indexer: &I,
    owner: &Pubkey,
) -> Result<Vec<TokenBalance>> {
    let accounts = indexer
        .get_compressed_token_accounts_by_owner(owner, None)
        .await?;
    aggregate_token_balances(&accounts)
}
