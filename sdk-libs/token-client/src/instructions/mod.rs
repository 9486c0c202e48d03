pub mod compress_native;
pub mod pack;
pub mod transfer;

use solana_sdk::{compute_budget::ComputeBudgetInstruction, instruction::Instruction};

pub use compress_native::{create_compress_native_instruction, NativeCompressionInstructionData};
pub use transfer::{
    create_transfer_instruction, InputTokenDataWithContext, PackedMerkleContext,
    PackedTokenTransferOutputData, TokenTransferInstructionData, TokenTransferOutputData,
    TransferInstructionInputs,
};

use crate::DEFAULT_COMPUTE_UNIT_LIMIT;

pub fn compute_budget_instruction() -> Instruction {
    ComputeBudgetInstruction::set_compute_unit_limit(DEFAULT_COMPUTE_UNIT_LIMIT)
}
