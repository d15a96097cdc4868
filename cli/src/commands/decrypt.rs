//! Decrypt Command - Decrypt a ciphertext through the gateway

use clap::Args;
use fhevm_sdk::{EncryptedType, FhevmApi, FhevmContext, SdkError};
use serde_json::json;

/// Decrypt a ciphertext
#[derive(Args)]
pub struct DecryptCommand {
    /// Ciphertext (0x hex)
    ciphertext: String,

    /// Type the ciphertext was encrypted as
    #[arg(short = 't', long = "type", default_value = "euint32")]
    value_type: EncryptedType,

    /// Contract that owns the ciphertext
    #[arg(long)]
    contract: Option<String>,

    /// User signature for a private decrypt (requires --contract)
    #[arg(long, requires = "contract")]
    signature: Option<String>,
}

impl DecryptCommand {
    pub async fn execute(self, ctx: &FhevmContext) -> anyhow::Result<()> {
        let value = match (&self.contract, &self.signature) {
            (Some(contract), Some(signature)) => {
                ctx.decrypt(&self.ciphertext, self.value_type, contract, signature)
                    .await?
            }
            (Some(contract), None) => {
                ctx.public_decrypt(&self.ciphertext, self.value_type, contract)
                    .await?
            }
            (None, _) => {
                let client = ctx.status()?.client.ok_or(SdkError::NotReady)?;
                client.decrypt(&self.ciphertext, self.value_type).await?
            }
        };

        let out = json!({
            "type": self.value_type.tag(),
            "value": value.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        Ok(())
    }
}
