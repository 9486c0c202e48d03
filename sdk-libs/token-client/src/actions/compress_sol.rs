use solana_sdk::{pubkey::Pubkey, transaction::Transaction};
use tracing::debug;
use veil_client::rpc::RpcConnection;

use crate::{
    actions::build_transaction,
    error::Result,
    instructions::{compute_budget_instruction, create_compress_native_instruction},
};

/// Compress native balance into a compressed account owned by `recipient`.
///
/// A deposit, not a spend: no note selection and no proof are involved.
pub async fn compress_sol<R: RpcConnection>(
    rpc: &R,
    payer: Pubkey,
    recipient: Pubkey,
    lamports: u64,
    output_state_tree: Pubkey,
) -> Result<Transaction> {
    debug!(%recipient, lamports, "compressing native balance");
    let compress_ix =
        create_compress_native_instruction(&payer, &recipient, lamports, &output_state_tree)?;
    let instructions = vec![compute_budget_instruction(), compress_ix];
    let blockhash = rpc.get_latest_blockhash().await?;
    Ok(build_transaction(&instructions, &payer, blockhash))
}
