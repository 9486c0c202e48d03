mod common;

use common::note;
use rand::{seq::SliceRandom, thread_rng};
use solana_sdk::pubkey::Pubkey;
use veil_token_client::{balance::aggregate_token_balances, selection::select_min_token_accounts};

#[test]
fn test_selection_is_stable_under_input_order() {
    let owner = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let notes: Vec<_> = (0..10u8)
        .map(|i| note(owner, mint, (i as u64 % 4) * 10 + 1, i))
        .collect();

    let (reference, _) = select_min_token_accounts(&notes, 45).unwrap();
    let mut rng = thread_rng();
    for _ in 0..20 {
        let mut shuffled = notes.clone();
        shuffled.shuffle(&mut rng);
        let (selected, _) = select_min_token_accounts(&shuffled, 45).unwrap();
        assert_eq!(selected, reference);
    }
}

#[test]
fn test_aggregation_is_stable_under_input_order() {
    let owner = Pubkey::new_unique();
    let mints: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
    let notes: Vec<_> = (0..12u8)
        .map(|i| note(owner, mints[i as usize % 3], i as u64 + 1, i))
        .collect();

    let reference = aggregate_token_balances(&notes).unwrap();
    let mut rng = thread_rng();
    for _ in 0..20 {
        let mut shuffled = notes.clone();
        shuffled.shuffle(&mut rng);
        assert_eq!(aggregate_token_balances(&shuffled).unwrap(), reference);
    }
}
