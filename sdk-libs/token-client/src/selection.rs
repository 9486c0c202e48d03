use veil_client::indexer::CompressedTokenAccount;

use crate::error::{Result, TokenClientError};

/// Picks the fewest notes whose amounts cover `target_amount`.
///
/// Policy: largest-first greedy. Ties between equal amounts are broken by
/// ascending account hash, so repeated calls over the same note set always
/// return the same selection. Returns the selected notes (in pick order) and
/// the untouched remainder.
///
/// Insufficient funds are detected here, before any proof is requested:
/// proof acquisition is an expensive external call and must not run for a
/// transfer that cannot succeed.
pub fn select_min_token_accounts(
    accounts: &[CompressedTokenAccount],
    target_amount: u64,
) -> Result<(Vec<CompressedTokenAccount>, Vec<CompressedTokenAccount>)> {
    if target_amount == 0 {
        return Ok((Vec::new(), accounts.to_vec()));
    }
    if let Some(first) = accounts.first() {
        if accounts.iter().any(|a| a.token.mint != first.token.mint) {
            return Err(TokenClientError::InvalidInput(
                "selection input mixes mints".to_string(),
            ));
        }
    }
    let available = accounts
        .iter()
        .try_fold(0u64, |acc, a| acc.checked_add(a.token.amount))
        .ok_or_else(|| {
            TokenClientError::InvalidInput("note amounts overflow u64".to_string())
        })?;
    if available < target_amount {
        return Err(TokenClientError::InsufficientBalance {
            available,
            required: target_amount,
        });
    }

    let mut sorted = accounts.to_vec();
    sorted.sort_by(|a, b| {
        b.token
            .amount
            .cmp(&a.token.amount)
            .then_with(|| a.hash.cmp(&b.hash))
    });

    let mut selected = Vec::new();
    let mut remainder = Vec::new();
    let mut covered: u64 = 0;
    for account in sorted {
        if covered < target_amount {
            covered += account.token.amount;
            selected.push(account);
        } else {
            remainder.push(account);
        }
    }
    Ok((selected, remainder))
}
