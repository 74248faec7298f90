//! Kyber-1024 KEM (NIST security category 5).

use super::kem::KyberKem;
use super::params::Kyber1024ParamsImpl;

/// Kyber-1024 KEM, implementing `api::Kem`.
pub type Kyber1024 = KyberKem<Kyber1024ParamsImpl>;
