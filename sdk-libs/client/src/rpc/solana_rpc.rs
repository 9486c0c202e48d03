use std::fmt::{Debug, Display, Formatter};

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    account::Account, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey,
};

use crate::rpc::{errors::RpcError, rpc_connection::RpcConnection};

pub enum SolanaRpcUrl {
    Testnet,
    Devnet,
    Localnet,
    Custom(String),
}

impl Display for SolanaRpcUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            SolanaRpcUrl::Testnet => "https://api.testnet.solana.com".to_string(),
            SolanaRpcUrl::Devnet => "https://api.devnet.solana.com".to_string(),
            SolanaRpcUrl::Localnet => "http://localhost:8899".to_string(),
            SolanaRpcUrl::Custom(url) => url.clone(),
        };
        write!(f, "{}", str)
    }
}

pub struct RpcConnectionConfig {
    pub url: SolanaRpcUrl,
    pub commitment_config: Option<CommitmentConfig>,
}

impl RpcConnectionConfig {
    pub fn local() -> Self {
        Self {
            url: SolanaRpcUrl::Localnet,
            commitment_config: Some(CommitmentConfig::confirmed()),
        }
    }
}

pub struct SolanaRpcConnection {
    pub client: RpcClient,
}

impl Debug for SolanaRpcConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolanaRpcConnection {{ url: {:?} }}", self.client.url())
    }
}

impl SolanaRpcConnection {
    pub fn new(config: RpcConnectionConfig) -> Self {
        let commitment_config = config
            .commitment_config
            .unwrap_or(CommitmentConfig::confirmed());
        let client = RpcClient::new_with_commitment(config.url.to_string(), commitment_config);
        Self { client }
    }
}

#[async_trait]
impl RpcConnection for SolanaRpcConnection {
    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        self.client
            .get_latest_blockhash()
            .await
            .map_err(RpcError::from)
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        let response = self
            .client
            .get_account_with_commitment(&address, self.client.commitment())
            .await?;
        Ok(response.value)
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        self.client.get_balance(pubkey).await.map_err(RpcError::from)
    }
}
