//! Identity verification implementations.
//!
//! - `supabase`: verifies bearer tokens against a Supabase-style auth service
//! - `trusting`: accepts any token (mock auth mode)

pub mod supabase;
pub mod trusting;

pub use supabase::SupabaseIdentityVerifier;
pub use trusting::TrustingIdentityVerifier;
