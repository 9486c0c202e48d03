use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, Default)]
pub struct GetCompressedTokenAccountsOptions {
    pub mint: Option<Pubkey>,
    pub cursor: Option<String>,
    pub limit: Option<u16>,
}

impl GetCompressedTokenAccountsOptions {
    pub fn new(mint: Option<Pubkey>) -> Self {
        Self {
            mint,
            cursor: None,
            limit: None,
        }
    }
}
