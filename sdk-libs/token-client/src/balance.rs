use std::collections::HashMap;

use solana_sdk::pubkey::Pubkey;
use veil_client::indexer::{CompressedTokenAccount, TokenBalance};

use crate::error::{Result, TokenClientError};

/// Collapses scattered compressed-token notes into one balance per mint.
///
/// Pure function: the input records are left untouched and a new vector is
/// returned. Output is sorted by mint so any permutation of the input yields
/// an identical result. Exactly one entry per mint.
pub fn aggregate_token_balances(accounts: &[CompressedTokenAccount]) -> Result<Vec<TokenBalance>> {
    let mut totals: HashMap<Pubkey, u64> = HashMap::new();
    for account in accounts {
        if account.token.mint == Pubkey::default() {
            return Err(TokenClientError::InvalidInput(
                "compressed token account without a mint".to_string(),
            ));
        }
        let entry = totals.entry(account.token.mint).or_insert(0);
        *entry = entry.checked_add(account.token.amount).ok_or_else(|| {
            TokenClientError::InvalidInput(format!(
                "token balance overflow for mint {}",
                account.token.mint
            ))
        })?;
    }
    let mut balances: Vec<TokenBalance> = totals
        .into_iter()
        .map(|(mint, balance)| TokenBalance { mint, balance })
        .collect();
    balances.sort_by_key(|balance| balance.mint);
    Ok(balances)
}

#[cfg(test)]
mod tests {
    use veil_client::indexer::TokenData;

    use super::*;

    fn account(mint: u8, amount: u64) -> CompressedTokenAccount {
        CompressedTokenAccount {
            token: TokenData {
                mint: Pubkey::new_from_array([mint; 32]),
                owner: Pubkey::new_from_array([9u8; 32]),
                amount,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_token_balances(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_sums_per_mint() {
        let accounts = vec![account(1, 5), account(1, 3), account(2, 7)];
        let balances = aggregate_token_balances(&accounts).unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].mint, Pubkey::new_from_array([1u8; 32]));
        assert_eq!(balances[0].balance, 8);
        assert_eq!(balances[1].balance, 7);
    }

    #[test]
    fn test_permutation_invariant() {
        let accounts = vec![account(1, 5), account(2, 7), account(1, 3), account(3, 1)];
        let expected = aggregate_token_balances(&accounts).unwrap();
        let mut reversed = accounts.clone();
        reversed.reverse();
        assert_eq!(aggregate_token_balances(&reversed).unwrap(), expected);
        let rotated = [&accounts[2..], &accounts[..2]].concat();
        assert_eq!(aggregate_token_balances(&rotated).unwrap(), expected);
    }

    #[test]
    fn test_input_not_mutated() {
        let accounts = vec![account(1, 5), account(1, 3)];
        aggregate_token_balances(&accounts).unwrap();
        assert_eq!(accounts[0].token.amount, 5);
        assert_eq!(accounts[1].token.amount, 3);
    }

    #[test]
    fn test_missing_mint_fails_fast() {
        let mut bad = account(1, 5);
        bad.token.mint = Pubkey::default();
        assert!(matches!(
            aggregate_token_balances(&[bad]),
            Err(TokenClientError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overflow_is_rejected() {
        let accounts = vec![account(1, u64::MAX), account(1, 1)];
        assert!(matches!(
            aggregate_token_balances(&accounts),
            Err(TokenClientError::InvalidInput(_))
        ));
    }
}
