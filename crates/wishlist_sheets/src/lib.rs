//! Wishlist sheets: spreadsheet client, credentials and the in-memory stand-in.
mod auth;
mod client;
mod memory;
mod types;

pub use auth::{
    ServiceAccountAuth, ServiceAccountKey, StaticToken, TokenProvider, DEFAULT_SCOPES,
};
pub use client::{GoogleSheetsClient, SheetClient, SheetSettings, DEFAULT_API_BASE};
pub use memory::InMemorySheet;
pub use types::{FailureKind, SheetError};
