use solana_sdk::{pubkey::Pubkey, transaction::Transaction};
use tracing::debug;
use veil_client::{
    indexer::{GetCompressedTokenAccountsOptions, Indexer},
    rpc::RpcConnection,
};

use crate::{
    actions::build_transaction,
    error::{Result, TokenClientError},
    instructions::{
        compute_budget_instruction, create_transfer_instruction, TokenTransferOutputData,
        TransferInstructionInputs,
    },
    proof::{ensure_proof_current, fetch_validity_proof},
    selection::select_min_token_accounts,
};

/// Transfer `amount` of compressed `mint` tokens from `owner` to `recipient`.
///
/// The amount is validated against the owner's aggregate note balance before
/// any proof is requested. The selected notes fund a recipient output plus a
/// change output back to the owner (omitted when the selection covers the
/// amount exactly).
pub async fn transfer_tokens<R: RpcConnection + Indexer>(
    rpc: &R,
    payer: Pubkey,
    owner: Pubkey,
    mint: Pubkey,
    recipient: Pubkey,
    amount: u64,
) -> Result<Transaction> {
    if amount == 0 {
        debug!(%mint, "zero-amount transfer, emitting empty transaction");
        let blockhash = rpc.get_latest_blockhash().await?;
        return Ok(build_transaction(&[], &payer, blockhash));
    }

    let accounts = rpc
        .get_compressed_token_accounts_by_owner(
            &owner,
            Some(GetCompressedTokenAccountsOptions::new(Some(mint))),
        )
        .await?;
    let (selected, _remainder) = select_min_token_accounts(&accounts, amount)?;
    debug!(
        %mint,
        amount,
        notes = selected.len(),
        "selected compressed token accounts for transfer"
    );
    let proof = fetch_validity_proof(rpc, &selected)
        .await
        .map_err(|e| TokenClientError::aborted("proof acquisition", e))?;
    ensure_proof_current(&selected, &proof)?;

    let input_sum: u64 = selected.iter().map(|a| a.token.amount).sum();
    let change = input_sum - amount;
    let tree = selected[0].tree_context.merkle_tree;
    let mut outputs = vec![TokenTransferOutputData {
        owner: recipient,
        amount,
        merkle_tree: tree,
    }];
    if change > 0 {
        outputs.push(TokenTransferOutputData {
            owner,
            amount: change,
            merkle_tree: tree,
        });
    }
    let transfer_ix = create_transfer_instruction(TransferInstructionInputs {
        fee_payer: payer,
        authority: owner,
        mint,
        input_accounts: &selected,
        output_accounts: &outputs,
        proof: Some(&proof),
        is_compress: false,
        compression_amount: None,
        token_pool: None,
        token_account: None,
    })
    .map_err(|e| TokenClientError::aborted("instruction assembly", e))?;

    let instructions = vec![compute_budget_instruction(), transfer_ix];
    let blockhash = rpc
        .get_latest_blockhash()
        .await
        .map_err(|e| TokenClientError::aborted("finalize", e.into()))?;
    Ok(build_transaction(&instructions, &payer, blockhash))
}
