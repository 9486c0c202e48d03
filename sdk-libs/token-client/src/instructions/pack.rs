use std::collections::HashMap;

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

/// Deduplicating registry for the trailing tree accounts of an instruction.
/// Instruction data refers to these accounts by index.
pub(crate) fn insert_or_get(remaining_accounts: &mut HashMap<Pubkey, usize>, pubkey: Pubkey) -> u8 {
    let next = remaining_accounts.len();
    *remaining_accounts.entry(pubkey).or_insert(next) as u8
}

pub(crate) fn to_account_metas(remaining_accounts: HashMap<Pubkey, usize>) -> Vec<AccountMeta> {
    let mut accounts = remaining_accounts.into_iter().collect::<Vec<(Pubkey, usize)>>();
    accounts.sort_by_key(|(_, index)| *index);
    accounts
        .into_iter()
        .map(|(pubkey, _)| AccountMeta::new(pubkey, false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_or_get_deduplicates() {
        let mut remaining = HashMap::new();
        let a = Pubkey::new_from_array([1u8; 32]);
        let b = Pubkey::new_from_array([2u8; 32]);
        assert_eq!(insert_or_get(&mut remaining, a), 0);
        assert_eq!(insert_or_get(&mut remaining, b), 1);
        assert_eq!(insert_or_get(&mut remaining, a), 0);
        assert_eq!(remaining.len(), 2);
    }

    #[test]
    fn test_metas_ordered_by_insertion() {
        let mut remaining = HashMap::new();
        let keys: Vec<Pubkey> = (0..5).map(|i| Pubkey::new_from_array([i; 32])).collect();
        for key in &keys {
            insert_or_get(&mut remaining, *key);
        }
        let metas = to_account_metas(remaining);
        let ordered: Vec<Pubkey> = metas.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(ordered, keys);
        assert!(metas.iter().all(|meta| meta.is_writable && !meta.is_signer));
    }
}
