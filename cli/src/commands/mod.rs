//! CLI Commands

mod decrypt;
mod encrypt;
mod listing;
mod status;

pub use decrypt::DecryptCommand;
pub use encrypt::EncryptCommand;
pub use listing::{ListingCommand, RequestCommand};
pub use status::StatusCommand;

use fhevm_sdk::{EncryptedType, EncryptedValue, FhevmApi, FhevmContext, PlainValue, SdkError};
use serde_json::{json, Value};

/// JSON view of an encrypted value
pub(crate) fn encrypted_json(value: &EncryptedValue) -> Value {
    json!({
        "type": value.value_type.tag(),
        "data": value.data(),
        "handle": value.handle_hex(),
    })
}

/// Encrypt a set of named fields and print them as one JSON object.
pub(crate) async fn encrypt_fields<I>(ctx: &FhevmContext, fields: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = (&'static str, PlainValue, EncryptedType)>,
{
    let mut out = serde_json::Map::new();
    for (name, value, value_type) in fields {
        let encrypted = ctx
            .encrypt(value, value_type)
            .await
            .map_err(|e: SdkError| anyhow::anyhow!("Failed to encrypt {}: {}", name, e))?;
        out.insert(name.to_string(), encrypted_json(&encrypted));
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(out))?);
    Ok(())
}
