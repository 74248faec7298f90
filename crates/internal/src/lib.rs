//! Internal utilities shared by the lattica algorithm crates
//!
//! Nothing here is a cryptographic algorithm in its own right; these are
//! the side-channel-sensitive helpers the algorithm crates build on.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
