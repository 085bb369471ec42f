//! BeatChain marketplace: fixed price listings and escrowed English
//! auctions for factory tokens.
//!
//! # Description
//! Sellers list tokens at a fixed price or put them up for a timed English
//! auction. Tokens stay with the seller while on sale; ownership moves only
//! as the terminal effect of `buyItem` or a winning `finalize`, through the
//! factory `transfer` entrypoint that trusts this contract. A token can be
//! on at most one active trade at a time.
//!
//! Every settlement splits the sale amount three ways: a platform fee to
//! the beneficiary, the royalty bound to the token at mint to its
//! beneficiary, and the remainder to the seller. Both rates are snapshotted
//! when the listing or auction is created, so later configuration changes
//! never affect trades already on the book.
//!
//! Auction bids are escrowed by this contract. An outbid escrow is refunded
//! in the same transaction that accepts the higher bid, so the contract
//! never holds more than the highest bid per auction.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, external::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod events;
mod external;
mod nft;
mod state;
