use std::fmt::Debug;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, warn};

use super::{
    base58::{decode_base58_to_fixed_array, Base58Conversions},
    error::IndexerError,
    options::GetCompressedTokenAccountsOptions,
    types::{
        CompressedProof, CompressedTokenAccount, Hash, TokenData, TreeContext,
        ValidityProofWithContext,
    },
    Indexer,
};

#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub base_path: String,
    pub api_key: Option<String>,
}

impl IndexerConfig {
    pub fn local() -> Self {
        Self {
            base_path: "http://127.0.0.1:8784".to_string(),
            api_key: None,
        }
    }
}

/// JSON-RPC adapter for a Veil indexer node.
///
/// Failures are surfaced as typed errors and never retried here; callers
/// that want a fresh state view restart their flow from account selection.
pub struct HttpIndexer {
    client: reqwest::Client,
    config: IndexerConfig,
}

impl Debug for HttpIndexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HttpIndexer {{ base_path: {} }}", self.config.base_path)
    }
}

#[derive(Serialize)]
struct JsonRpcRequest<P> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'static str,
    params: P,
}

#[derive(Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcErrorPayload>,
}

#[derive(Deserialize)]
struct JsonRpcErrorPayload {
    code: i64,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenAccountsParams {
    owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u16>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidityProofParams {
    hashes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TokenAccountList {
    items: Vec<TokenAccountPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAccountPayload {
    mint: String,
    owner: String,
    amount: u64,
    hash: String,
    tree: String,
    queue: String,
    leaf_index: u32,
    root_seq: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidityProofPayload {
    compressed_proof: CompressedProofPayload,
    root_indices: Vec<u16>,
    root_seq: u64,
}

#[derive(Debug, Deserialize)]
struct CompressedProofPayload {
    a: String,
    b: String,
    c: String,
}

fn decode_base64_fixed<const N: usize>(field: &str, s: &str) -> Result<[u8; N], IndexerError> {
    let bytes = base64::decode(s).map_err(|e| IndexerError::decode_error(field, e))?;
    bytes.try_into().map_err(|v: Vec<u8>| {
        IndexerError::decode_error(field, format!("expected {} bytes, got {}", N, v.len()))
    })
}

fn parse_token_account(payload: &TokenAccountPayload) -> Result<CompressedTokenAccount, IndexerError> {
    Ok(CompressedTokenAccount {
        token: TokenData {
            mint: Pubkey::new_from_array(decode_base58_to_fixed_array(&payload.mint)?),
            owner: Pubkey::new_from_array(decode_base58_to_fixed_array(&payload.owner)?),
            amount: payload.amount,
        },
        hash: decode_base58_to_fixed_array(&payload.hash)?,
        tree_context: TreeContext {
            merkle_tree: Pubkey::new_from_array(decode_base58_to_fixed_array(&payload.tree)?),
            nullifier_queue: Pubkey::new_from_array(decode_base58_to_fixed_array(&payload.queue)?),
            leaf_index: payload.leaf_index,
            root_seq: payload.root_seq,
        },
    })
}

fn parse_validity_proof(
    payload: ValidityProofPayload,
    requested: usize,
) -> Result<ValidityProofWithContext, IndexerError> {
    if payload.root_indices.len() != requested {
        return Err(IndexerError::ProofMisaligned {
            requested,
            returned: payload.root_indices.len(),
        });
    }
    Ok(ValidityProofWithContext {
        proof: CompressedProof {
            a: decode_base64_fixed("proof.a", &payload.compressed_proof.a)?,
            b: decode_base64_fixed("proof.b", &payload.compressed_proof.b)?,
            c: decode_base64_fixed("proof.c", &payload.compressed_proof.c)?,
        },
        root_indices: payload.root_indices,
        root_seq: payload.root_seq,
    })
}

impl HttpIndexer {
    pub fn new(config: IndexerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn post<P: Serialize, T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: P,
    ) -> Result<T, IndexerError> {
        debug!(method, "indexer request");
        let mut request = self.client.post(&self.config.base_path).json(&JsonRpcRequest {
            jsonrpc: "2.0",
            id: "veil-client",
            method,
            params,
        });
        if let Some(api_key) = &self.config.api_key {
            request = request.header("api-key", api_key);
        }
        let response: JsonRpcResponse<T> = request.send().await?.json().await?;
        if let Some(error) = response.error {
            warn!(method, code = error.code, "indexer error: {}", error.message);
            return Err(IndexerError::ResponseError {
                code: error.code,
                message: error.message,
            });
        }
        response.result.ok_or(IndexerError::MissingResult)
    }
}

#[async_trait]
impl Indexer for HttpIndexer {
    async fn get_compressed_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        options: Option<GetCompressedTokenAccountsOptions>,
    ) -> Result<Vec<CompressedTokenAccount>, IndexerError> {
        let options = options.unwrap_or_default();
        let result: TokenAccountList = self
            .post(
                "getCompressedTokenAccountsByOwner",
                TokenAccountsParams {
                    owner: owner.to_string(),
                    mint: options.mint.map(|mint| mint.to_string()),
                    cursor: options.cursor,
                    limit: options.limit,
                },
            )
            .await?;
        result.items.iter().map(parse_token_account).collect()
    }

    async fn get_validity_proof(
        &self,
        hashes: Vec<Hash>,
    ) -> Result<ValidityProofWithContext, IndexerError> {
        let requested = hashes.len();
        let result: ValidityProofPayload = self
            .post(
                "getValidityProof",
                ValidityProofParams {
                    hashes: hashes.iter().map(|hash| hash.to_base58()).collect(),
                },
            )
            .await?;
        parse_validity_proof(result, requested)
    }
}
