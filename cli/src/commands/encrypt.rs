//! Encrypt Command - Encrypt a single value

use clap::Args;
use fhevm_sdk::{EncryptedType, FhevmApi, FhevmContext, PlainValue};

use super::encrypted_json;

/// Encrypt a single value
#[derive(Args)]
pub struct EncryptCommand {
    /// Plain value (decimal or 0x hex; true/false; 0x address)
    value: String,

    /// Declared type (ebool, euint8 .. euint256, eaddress)
    #[arg(short = 't', long = "type", default_value = "euint32")]
    value_type: EncryptedType,
}

impl EncryptCommand {
    pub async fn execute(self, ctx: &FhevmContext) -> anyhow::Result<()> {
        let plain = PlainValue::parse(&self.value, self.value_type)?;
        let encrypted = ctx.encrypt(plain, self.value_type).await?;

        println!("{}", serde_json::to_string_pretty(&encrypted_json(&encrypted))?);
        Ok(())
    }
}
