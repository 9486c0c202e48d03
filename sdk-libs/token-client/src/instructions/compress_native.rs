use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use veil_client::indexer::CompressedProof;

use crate::{
    error::{Result, TokenClientError},
    get_compressed_sol_pda, get_registered_program_pda, get_system_cpi_authority_pda,
    ACCOUNT_COMPRESSION_PROGRAM_ID, NOOP_PROGRAM_ID, VEIL_SYSTEM_PROGRAM_ID,
};

const COMPRESS_NATIVE_DISCRIMINATOR: [u8; 8] = [59, 91, 164, 7, 240, 112, 34, 87];

#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct OutputCompressedNativeAccount {
    pub owner: Pubkey,
    pub lamports: u64,
    pub merkle_tree_index: u8,
}

/// Deposits are proof-free: no existing note is spent, the lamports enter
/// the pool and a single output note is appended to the state tree.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct NativeCompressionInstructionData {
    pub proof: Option<CompressedProof>,
    pub output_compressed_accounts: Vec<OutputCompressedNativeAccount>,
    pub compression_lamports: Option<u64>,
    pub is_compress: bool,
}

pub fn create_compress_native_instruction(
    fee_payer: &Pubkey,
    recipient: &Pubkey,
    lamports: u64,
    output_state_tree: &Pubkey,
) -> Result<Instruction> {
    if lamports == 0 {
        return Err(TokenClientError::InvalidInput(
            "cannot compress zero lamports".to_string(),
        ));
    }
    let instruction_data = NativeCompressionInstructionData {
        proof: None,
        output_compressed_accounts: vec![OutputCompressedNativeAccount {
            owner: *recipient,
            lamports,
            merkle_tree_index: 0,
        }],
        compression_lamports: Some(lamports),
        is_compress: true,
    };
    let serialized = instruction_data
        .try_to_vec()
        .map_err(|e| TokenClientError::Serialization(e.to_string()))?;
    let mut data = Vec::with_capacity(8 + serialized.len());
    data.extend_from_slice(&COMPRESS_NATIVE_DISCRIMINATOR);
    data.extend(serialized);

    let accounts = vec![
        AccountMeta::new(*fee_payer, true),
        AccountMeta::new_readonly(*fee_payer, true),
        AccountMeta::new_readonly(get_registered_program_pda(&VEIL_SYSTEM_PROGRAM_ID), false),
        AccountMeta::new_readonly(NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(get_system_cpi_authority_pda(), false),
        AccountMeta::new_readonly(ACCOUNT_COMPRESSION_PROGRAM_ID, false),
        AccountMeta::new(get_compressed_sol_pda(), false),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new(*output_state_tree, false),
    ];

    Ok(Instruction {
        program_id: VEIL_SYSTEM_PROGRAM_ID,
        accounts,
        data,
    })
}
