use std::collections::HashMap;

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};
use veil_client::indexer::{CompressedProof, CompressedTokenAccount, ValidityProofWithContext};

use crate::{
    error::{Result, TokenClientError},
    get_cpi_authority_pda, get_registered_program_pda, get_system_cpi_authority_pda,
    instructions::pack::{insert_or_get, to_account_metas},
    ACCOUNT_COMPRESSION_PROGRAM_ID, COMPRESSED_TOKEN_PROGRAM_ID, NOOP_PROGRAM_ID,
    VEIL_SYSTEM_PROGRAM_ID,
};

const TRANSFER_DISCRIMINATOR: [u8; 8] = [163, 52, 200, 231, 140, 3, 69, 186];

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PackedMerkleContext {
    pub merkle_tree_pubkey_index: u8,
    pub nullifier_queue_pubkey_index: u8,
    pub leaf_index: u32,
}

#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct InputTokenDataWithContext {
    pub amount: u64,
    pub merkle_context: PackedMerkleContext,
    pub root_index: u16,
}

/// Output note addressed by tree pubkey; packed into an index on serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTransferOutputData {
    pub owner: Pubkey,
    pub amount: u64,
    pub merkle_tree: Pubkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PackedTokenTransferOutputData {
    pub owner: Pubkey,
    pub amount: u64,
    pub merkle_tree_index: u8,
}

#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct TokenTransferInstructionData {
    pub proof: Option<CompressedProof>,
    pub mint: Pubkey,
    pub input_token_data_with_context: Vec<InputTokenDataWithContext>,
    pub output_compressed_accounts: Vec<PackedTokenTransferOutputData>,
    pub is_compress: bool,
    pub compression_amount: Option<u64>,
}

/// Inputs for the compressed-token spend/mint instruction.
///
/// `input_accounts` are the notes being consumed (empty when compressing:
/// compressing deposits from a token account, it spends no notes).
/// `token_pool` and `token_account` are set for compression and
/// decompression, where tokens cross between the pool and an SPL account.
#[derive(Debug)]
pub struct TransferInstructionInputs<'a> {
    pub fee_payer: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub input_accounts: &'a [CompressedTokenAccount],
    pub output_accounts: &'a [TokenTransferOutputData],
    pub proof: Option<&'a ValidityProofWithContext>,
    pub is_compress: bool,
    pub compression_amount: Option<u64>,
    pub token_pool: Option<Pubkey>,
    pub token_account: Option<Pubkey>,
}

pub fn create_transfer_instruction(inputs: TransferInstructionInputs<'_>) -> Result<Instruction> {
    // Spending notes without a proof cannot validate on chain.
    if !inputs.input_accounts.is_empty() && inputs.proof.is_none() {
        return Err(TokenClientError::InvalidInput(
            "spending compressed accounts requires a validity proof".to_string(),
        ));
    }
    let root_indices: Vec<u16> = match inputs.proof {
        Some(proof) => {
            if proof.root_indices.len() != inputs.input_accounts.len() {
                return Err(TokenClientError::InvalidInput(format!(
                    "{} root indices for {} input accounts",
                    proof.root_indices.len(),
                    inputs.input_accounts.len()
                )));
            }
            proof.root_indices.clone()
        }
        None => Vec::new(),
    };

    let mut remaining_accounts = HashMap::<Pubkey, usize>::new();
    let mut input_token_data_with_context = Vec::with_capacity(inputs.input_accounts.len());
    for (account, root_index) in inputs.input_accounts.iter().zip(root_indices) {
        let merkle_tree_pubkey_index =
            insert_or_get(&mut remaining_accounts, account.tree_context.merkle_tree);
        let nullifier_queue_pubkey_index =
            insert_or_get(&mut remaining_accounts, account.tree_context.nullifier_queue);
        input_token_data_with_context.push(InputTokenDataWithContext {
            amount: account.token.amount,
            merkle_context: PackedMerkleContext {
                merkle_tree_pubkey_index,
                nullifier_queue_pubkey_index,
                leaf_index: account.tree_context.leaf_index,
            },
            root_index,
        });
    }
    let output_compressed_accounts: Vec<PackedTokenTransferOutputData> = inputs
        .output_accounts
        .iter()
        .map(|output| PackedTokenTransferOutputData {
            owner: output.owner,
            amount: output.amount,
            merkle_tree_index: insert_or_get(&mut remaining_accounts, output.merkle_tree),
        })
        .collect();

    let instruction_data = TokenTransferInstructionData {
        proof: inputs.proof.map(|proof| proof.proof.clone()),
        mint: inputs.mint,
        input_token_data_with_context,
        output_compressed_accounts,
        is_compress: inputs.is_compress,
        compression_amount: inputs.compression_amount,
    };
    let serialized = instruction_data
        .try_to_vec()
        .map_err(|e| TokenClientError::Serialization(e.to_string()))?;
    let mut data = Vec::with_capacity(8 + serialized.len());
    data.extend_from_slice(&TRANSFER_DISCRIMINATOR);
    data.extend(serialized);

    let (cpi_authority_pda, _) = get_cpi_authority_pda();
    let mut accounts = vec![
        AccountMeta::new(inputs.fee_payer, true),
        AccountMeta::new_readonly(inputs.authority, true),
        AccountMeta::new_readonly(cpi_authority_pda, false),
        AccountMeta::new_readonly(VEIL_SYSTEM_PROGRAM_ID, false),
        AccountMeta::new_readonly(get_registered_program_pda(&VEIL_SYSTEM_PROGRAM_ID), false),
        AccountMeta::new_readonly(NOOP_PROGRAM_ID, false),
        AccountMeta::new_readonly(get_system_cpi_authority_pda(), false),
        AccountMeta::new_readonly(ACCOUNT_COMPRESSION_PROGRAM_ID, false),
    ];
    if let Some(token_pool) = inputs.token_pool {
        accounts.push(AccountMeta::new(token_pool, false));
    }
    if let Some(token_account) = inputs.token_account {
        accounts.push(AccountMeta::new(token_account, false));
    }
    if inputs.token_pool.is_some() {
        accounts.push(AccountMeta::new_readonly(spl_token::id(), false));
    }
    accounts.push(AccountMeta::new_readonly(system_program::id(), false));
    accounts.extend(to_account_metas(remaining_accounts));

    Ok(Instruction {
        program_id: COMPRESSED_TOKEN_PROGRAM_ID,
        accounts,
        data,
    })
}
