use tracing::{debug, warn};
use veil_client::indexer::{
    CompressedTokenAccount, Hash, Indexer, IndexerError, ValidityProofWithContext,
};

use crate::error::{Result, TokenClientError};

/// Requests a validity proof for the selected notes, preserving selection
/// order, and checks that the returned root indices line up with them.
pub async fn fetch_validity_proof<I: Indexer>(
    indexer: &I,
    accounts: &[CompressedTokenAccount],
) -> Result<ValidityProofWithContext> {
    if accounts.is_empty() {
        return Err(TokenClientError::InvalidInput(
            "validity proof requested for zero accounts".to_string(),
        ));
    }
    let hashes: Vec<Hash> = accounts.iter().map(|account| account.hash).collect();
    debug!(accounts = hashes.len(), "requesting validity proof");
    let proof = indexer.get_validity_proof(hashes).await?;
    if proof.root_indices.len() != accounts.len() {
        return Err(TokenClientError::Indexer(IndexerError::ProofMisaligned {
            requested: accounts.len(),
            returned: proof.root_indices.len(),
        }));
    }
    Ok(proof)
}

/// Rejects a proof generated against a different tree root than the one the
/// accounts were read at. A stale proof is terminal for the attempt; the
/// caller restarts from note selection with a fresh state view.
pub fn ensure_proof_current(
    accounts: &[CompressedTokenAccount],
    proof: &ValidityProofWithContext,
) -> Result<()> {
    for account in accounts {
        if account.tree_context.root_seq != proof.root_seq {
            warn!(
                proof_root_seq = proof.root_seq,
                account_root_seq = account.tree_context.root_seq,
                "state tree root advanced, proof is stale"
            );
            return Err(TokenClientError::StaleProof {
                proof_root_seq: proof.root_seq,
                account_root_seq: account.tree_context.root_seq,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use veil_client::indexer::{CompressedProof, TreeContext};

    use super::*;

    fn account_at(root_seq: u64) -> CompressedTokenAccount {
        CompressedTokenAccount {
            tree_context: TreeContext {
                root_seq,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn proof_at(root_seq: u64, inputs: usize) -> ValidityProofWithContext {
        ValidityProofWithContext {
            proof: CompressedProof::default(),
            root_indices: (0..inputs as u16).collect(),
            root_seq,
        }
    }

    #[test]
    fn test_current_proof_accepted() {
        let accounts = vec![account_at(4), account_at(4)];
        assert!(ensure_proof_current(&accounts, &proof_at(4, 2)).is_ok());
    }

    #[test]
    fn test_advanced_root_rejected() {
        let accounts = vec![account_at(4), account_at(4)];
        let err = ensure_proof_current(&accounts, &proof_at(5, 2)).unwrap_err();
        assert!(matches!(
            err,
            TokenClientError::StaleProof {
                proof_root_seq: 5,
                account_root_seq: 4
            }
        ));
    }
}
