use solana_sdk::{pubkey::Pubkey, transaction::Transaction};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};
use tracing::debug;
use veil_client::{
    indexer::{GetCompressedTokenAccountsOptions, Indexer},
    rpc::RpcConnection,
};

use crate::{
    actions::build_transaction,
    error::{Result, TokenClientError},
    get_token_pool_pda,
    instructions::{
        compute_budget_instruction, create_transfer_instruction, TokenTransferOutputData,
        TransferInstructionInputs,
    },
    proof::{ensure_proof_current, fetch_validity_proof},
    selection::select_min_token_accounts,
};

/// Decompress `amount` of `mint` into the owner's associated token account,
/// creating the associated account when it does not exist yet.
///
/// `amount == 0` is a deliberate no-op guard against zero-value
/// transactions: the returned transaction carries no instructions at all,
/// not even the compute-budget declaration.
pub async fn decompress_tokens<R: RpcConnection + Indexer>(
    rpc: &R,
    payer: Pubkey,
    owner: Pubkey,
    mint: Pubkey,
    amount: u64,
) -> Result<Transaction> {
    if amount == 0 {
        debug!(%mint, "zero-amount decompression, emitting empty transaction");
        let blockhash = rpc.get_latest_blockhash().await?;
        return Ok(build_transaction(&[], &payer, blockhash));
    }

    let recipient_token_account = get_associated_token_address(&owner, &mint);
    let mut instructions = vec![compute_budget_instruction()];
    if rpc.get_account(recipient_token_account).await?.is_none() {
        debug!(%recipient_token_account, "destination missing, creating associated token account");
        instructions.push(create_associated_token_account(
            &payer,
            &owner,
            &mint,
            &spl_token::id(),
        ));
    }

    let accounts = rpc
        .get_compressed_token_accounts_by_owner(
            &owner,
            Some(GetCompressedTokenAccountsOptions::new(Some(mint))),
        )
        .await?;
    let (selected, _remainder) = select_min_token_accounts(&accounts, amount)?;
    let proof = fetch_validity_proof(rpc, &selected)
        .await
        .map_err(|e| TokenClientError::aborted("proof acquisition", e))?;
    ensure_proof_current(&selected, &proof)?;

    let input_sum: u64 = selected.iter().map(|a| a.token.amount).sum();
    let change = input_sum - amount;
    let change_output = TokenTransferOutputData {
        owner,
        amount: change,
        merkle_tree: selected[0].tree_context.merkle_tree,
    };
    let outputs = if change > 0 {
        std::slice::from_ref(&change_output)
    } else {
        &[]
    };
    let decompress_ix = create_transfer_instruction(TransferInstructionInputs {
        fee_payer: payer,
        authority: owner,
        mint,
        input_accounts: &selected,
        output_accounts: outputs,
        proof: Some(&proof),
        is_compress: false,
        compression_amount: Some(amount),
        token_pool: Some(get_token_pool_pda(&mint)),
        token_account: Some(recipient_token_account),
    })
    .map_err(|e| TokenClientError::aborted("instruction assembly", e))?;
    instructions.push(decompress_ix);

    let blockhash = rpc
        .get_latest_blockhash()
        .await
        .map_err(|e| TokenClientError::aborted("finalize", e.into()))?;
    Ok(build_transaction(&instructions, &payer, blockhash))
}
