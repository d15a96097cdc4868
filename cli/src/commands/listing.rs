//! Listing / Request Commands - Encrypt the matching fields

use clap::Args;
use fhevm_sdk::{EncryptedType, FhevmContext, PlainValue, PropertyType};

use super::encrypt_fields;

/// Encrypt the fields of a landlord listing
#[derive(Args)]
pub struct ListingCommand {
    /// Monthly rent
    #[arg(long)]
    price: u32,

    /// Number of bedrooms
    #[arg(long)]
    bedrooms: u8,

    /// Postal code
    #[arg(long)]
    postal_code: u32,

    /// apartment, house, condo or studio
    #[arg(long, default_value = "apartment")]
    property_type: PropertyType,
}

impl ListingCommand {
    pub async fn execute(self, ctx: &FhevmContext) -> anyhow::Result<()> {
        tracing::info!(price = self.price, bedrooms = self.bedrooms, "Encrypting listing");

        encrypt_fields(
            ctx,
            [
                ("price", PlainValue::from(self.price), EncryptedType::Euint32),
                ("bedrooms", PlainValue::from(self.bedrooms), EncryptedType::Euint8),
                ("postalCode", PlainValue::from(self.postal_code), EncryptedType::Euint32),
                (
                    "propertyType",
                    PlainValue::from(self.property_type.code()),
                    EncryptedType::Euint8,
                ),
            ],
        )
        .await
    }
}

/// Encrypt the fields of a tenant request
#[derive(Args)]
pub struct RequestCommand {
    /// Highest acceptable monthly rent
    #[arg(long)]
    max_budget: u32,

    /// Minimum number of bedrooms
    #[arg(long)]
    min_bedrooms: u8,

    /// Preferred postal code
    #[arg(long)]
    postal_code: u32,

    /// Preferred property type
    #[arg(long, default_value = "apartment")]
    property_type: PropertyType,
}

impl RequestCommand {
    pub async fn execute(self, ctx: &FhevmContext) -> anyhow::Result<()> {
        tracing::info!(max_budget = self.max_budget, min_bedrooms = self.min_bedrooms, "Encrypting request");

        encrypt_fields(
            ctx,
            [
                ("maxBudget", PlainValue::from(self.max_budget), EncryptedType::Euint32),
                ("minBedrooms", PlainValue::from(self.min_bedrooms), EncryptedType::Euint8),
                ("postalCode", PlainValue::from(self.postal_code), EncryptedType::Euint32),
                (
                    "propertyType",
                    PlainValue::from(self.property_type.code()),
                    EncryptedType::Euint8,
                ),
            ],
        )
        .await
    }
}
