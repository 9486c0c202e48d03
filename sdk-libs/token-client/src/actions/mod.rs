mod balances;
mod compress_sol;
mod compress_tokens;
mod decompress_tokens;
mod transfer;

pub use balances::get_compressed_token_balances;
pub use compress_sol::compress_sol;
pub use compress_tokens::compress_tokens;
pub use decompress_tokens::decompress_tokens;
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};
pub use transfer::transfer_tokens;

/// Assembles the unsigned skeleton: fee payer and recent blockhash are set
/// exactly once, here. Signing and submission belong to the caller.
pub(crate) fn build_transaction(
    instructions: &[Instruction],
    payer: &Pubkey,
    blockhash: Hash,
) -> Transaction {
    let message = Message::new_with_blockhash(instructions, Some(payer), &blockhash);
    Transaction::new_unsigned(message)
}
