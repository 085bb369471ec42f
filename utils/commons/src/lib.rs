//! Common types shared by the BeatChain factory and marketplace contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{authority::*, errors::*, fees::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

#[cfg(not(target_arch = "wasm32"))]
pub mod test;

mod authority;
mod errors;
mod fees;
mod structs;
mod types;
