//! Wallet, contract and browser services.
//!
//! This module provides everything that talks to the outside world:
//!
//! # Services
//!
//! - [`wallet`] - EIP-1193 provider integration (MetaMask)
//! - [`contract`] - MintLockr contract binding and receipt polling
//! - [`minter`] - Connect and mint flows
//! - [`image`] - File decoding and clipboard access

pub mod wallet;
pub mod contract;
pub mod minter;
pub mod image;

pub use wallet::*;
pub use contract::*;
pub use minter::*;
pub use image::*;
