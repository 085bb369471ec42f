//! BeatChain collection factory and asset registry.
//!
//! # Description
//! Creates music NFT collections and mints tracks into them. A collection is
//! a registry record with a name, a symbol and a sequential token counter;
//! tokens carry the track metadata and a royalty rate that are both fixed at
//! mint. Minting is payable: the configured minting fee is deducted from the
//! attached payment and routed to the platform fee recipient, the remainder
//! is refunded to the minter.
//!
//! Token ownership only ever changes through the registered marketplace
//! contract, as the terminal effect of a sale or auction settlement. There
//! is no burn function and no free-form transfer.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod events;
mod external;
mod state;
