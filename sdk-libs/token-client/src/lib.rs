pub mod actions;
pub mod balance;
pub mod error;
pub mod instructions;
pub mod proof;
pub mod selection;

use solana_program::pubkey;
use solana_sdk::pubkey::Pubkey;

pub const COMPRESSED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("cTokenmWW8bLPjZEBAUgYy3zKxQZW6VKi7bqNFEVv3m");

pub const VEIL_SYSTEM_PROGRAM_ID: Pubkey = pubkey!("SySTEM1eSU2p4BGQfQpimFEWWSC1XDFeun3Nqzz3rT7");

pub const ACCOUNT_COMPRESSION_PROGRAM_ID: Pubkey =
    pubkey!("compr6CUsB5m2jS4Y3831ztGSTnDpnKJTKS95d64XVq");

pub const NOOP_PROGRAM_ID: Pubkey = pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");

pub const CPI_AUTHORITY_SEED: &[u8] = b"cpi_authority";
pub const POOL_SEED: &[u8] = b"pool";
pub const COMPRESSED_SOL_PDA_SEED: &[u8] = b"compressed_sol_pda";

/// Compute-unit ceiling declared ahead of every substantive instruction.
pub const DEFAULT_COMPUTE_UNIT_LIMIT: u32 = 1_000_000;

/// Return the cpi authority pda of the compressed token program.
pub fn get_cpi_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CPI_AUTHORITY_SEED], &COMPRESSED_TOKEN_PROGRAM_ID)
}

pub fn get_system_cpi_authority_pda() -> Pubkey {
    Pubkey::find_program_address(&[CPI_AUTHORITY_SEED], &VEIL_SYSTEM_PROGRAM_ID).0
}

pub fn get_registered_program_pda(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &ACCOUNT_COMPRESSION_PROGRAM_ID).0
}

/// Token pool holding the uncompressed side of a mint's compressed supply.
pub fn get_token_pool_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[POOL_SEED, mint.as_ref()], &COMPRESSED_TOKEN_PROGRAM_ID).0
}

/// Pool the system program escrows compressed lamports in.
pub fn get_compressed_sol_pda() -> Pubkey {
    Pubkey::find_program_address(&[COMPRESSED_SOL_PDA_SEED], &VEIL_SYSTEM_PROGRAM_ID).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_pda_depends_on_mint() {
        let mint_a = Pubkey::new_from_array([1u8; 32]);
        let mint_b = Pubkey::new_from_array([2u8; 32]);
        assert_ne!(get_token_pool_pda(&mint_a), get_token_pool_pda(&mint_b));
        assert_eq!(get_token_pool_pda(&mint_a), get_token_pool_pda(&mint_a));
    }

    #[test]
    fn test_cpi_authority_is_off_curve() {
        let (pda, _bump) = get_cpi_authority_pda();
        assert!(!pda.is_on_curve());
    }
}
