//! Post-quantum parameter sets

pub mod kyber;
pub mod newhope;
