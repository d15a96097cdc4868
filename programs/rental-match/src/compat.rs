//! Encrypted compatibility check between a listing and a request.
//!
//! The program never sees plaintext. It derives deterministic result
//! handles for each FHE operation and publishes them; the off-chain
//! executor evaluates the operations and binds results to these handles.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::HANDLE_DOMAIN_BINARY;
use crate::state::{Handle, Listing, RentalRequest};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FheBinaryOp {
    Le,
    Ge,
    Eq,
    And,
}

pub fn derive_binary_handle(
    op: FheBinaryOp,
    lhs: &Handle,
    rhs: &Handle,
    program_id: &Pubkey,
) -> Handle {
    let op_byte = [op as u8];
    hashv(&[HANDLE_DOMAIN_BINARY, program_id.as_ref(), &op_byte, lhs, rhs]).to_bytes()
}

/// Result handles for each predicate and their conjunction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CompatibilityHandles {
    pub price_ok: Handle,
    pub bedrooms_ok: Handle,
    pub postal_ok: Handle,
    pub type_ok: Handle,
    pub compatible: Handle,
}

/// price <= budget, bedrooms >= min, same postal code, same property type.
pub fn derive_compatibility(
    listing: &Listing,
    request: &RentalRequest,
    program_id: &Pubkey,
) -> CompatibilityHandles {
    let price_ok =
        derive_binary_handle(FheBinaryOp::Le, &listing.price, &request.max_budget, program_id);
    let bedrooms_ok = derive_binary_handle(
        FheBinaryOp::Ge,
        &listing.bedrooms,
        &request.min_bedrooms,
        program_id,
    );
    let postal_ok = derive_binary_handle(
        FheBinaryOp::Eq,
        &listing.postal_code,
        &request.postal_code,
        program_id,
    );
    let type_ok = derive_binary_handle(
        FheBinaryOp::Eq,
        &listing.property_type,
        &request.property_type,
        program_id,
    );

    let price_and_rooms = derive_binary_handle(FheBinaryOp::And, &price_ok, &bedrooms_ok, program_id);
    let place_and_type = derive_binary_handle(FheBinaryOp::And, &postal_ok, &type_ok, program_id);
    let compatible =
        derive_binary_handle(FheBinaryOp::And, &price_and_rooms, &place_and_type, program_id);

    CompatibilityHandles {
        price_ok,
        bedrooms_ok,
        postal_ok,
        type_ok,
        compatible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing {
            listing_id: 1,
            owner: Pubkey::new_unique(),
            price: [1u8; 32],
            bedrooms: [2u8; 32],
            postal_code: [3u8; 32],
            property_type: [4u8; 32],
            is_active: true,
            is_matched: false,
            created_at: 0,
            bump: 255,
        }
    }

    fn request() -> RentalRequest {
        RentalRequest {
            request_id: 1,
            owner: Pubkey::new_unique(),
            max_budget: [5u8; 32],
            min_bedrooms: [6u8; 32],
            postal_code: [7u8; 32],
            property_type: [8u8; 32],
            is_active: true,
            is_matched: false,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let program_id = Pubkey::new_unique();
        let a = derive_compatibility(&listing(), &request(), &program_id);
        let b = derive_compatibility(&listing(), &request(), &program_id);
        assert_eq!(a, b);
    }

    #[test]
    fn operation_and_operand_order_matter() {
        let program_id = Pubkey::new_unique();
        let (x, y) = ([1u8; 32], [2u8; 32]);
        let le = derive_binary_handle(FheBinaryOp::Le, &x, &y, &program_id);
        let ge = derive_binary_handle(FheBinaryOp::Ge, &x, &y, &program_id);
        let swapped = derive_binary_handle(FheBinaryOp::Le, &y, &x, &program_id);
        assert_ne!(le, ge);
        assert_ne!(le, swapped);
    }

    #[test]
    fn handles_are_bound_to_the_program() {
        let a = derive_compatibility(&listing(), &request(), &Pubkey::new_unique());
        let b = derive_compatibility(&listing(), &request(), &Pubkey::new_unique());
        assert_ne!(a.compatible, b.compatible);
    }

    #[test]
    fn predicates_are_distinct() {
        let h = derive_compatibility(&listing(), &request(), &Pubkey::new_unique());
        let all = [h.price_ok, h.bedrooms_ok, h.postal_ok, h.type_ok, h.compatible];
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
    }
}
