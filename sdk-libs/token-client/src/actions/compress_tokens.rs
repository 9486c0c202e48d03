use solana_sdk::{pubkey::Pubkey, transaction::Transaction};
use tracing::debug;
use veil_client::rpc::RpcConnection;

use crate::{
    actions::build_transaction,
    error::Result,
    get_token_pool_pda,
    instructions::{
        compute_budget_instruction, create_transfer_instruction, TokenTransferOutputData,
        TransferInstructionInputs,
    },
};

/// Compress tokens from the owner's SPL token account into a compressed
/// account. The source is the direct token holding, so no notes are selected
/// and no proof is needed.
pub async fn compress_tokens<R: RpcConnection>(
    rpc: &R,
    payer: Pubkey,
    owner: Pubkey,
    mint: Pubkey,
    amount: u64,
    source_token_account: Pubkey,
    output_state_tree: Pubkey,
) -> Result<Transaction> {
    debug!(%mint, amount, "compressing token balance");
    let output = TokenTransferOutputData {
        owner,
        amount,
        merkle_tree: output_state_tree,
    };
    let compress_ix = create_transfer_instruction(TransferInstructionInputs {
        fee_payer: payer,
        authority: owner,
        mint,
        input_accounts: &[],
        output_accounts: std::slice::from_ref(&output),
        proof: None,
        is_compress: true,
        compression_amount: Some(amount),
        token_pool: Some(get_token_pool_pda(&mint)),
        token_account: Some(source_token_account),
    })?;
    let instructions = vec![compute_budget_instruction(), compress_ix];
    let blockhash = rpc.get_latest_blockhash().await?;
    Ok(build_transaction(&instructions, &payer, blockhash))
}
