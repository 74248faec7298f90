// kem/src/newhope/tests.rs

use super::params::{NewHope1024ParamsImpl, NewHope512ParamsImpl, NewHopeParams, NEWHOPE_SS_BYTES};
use super::{NewHope1024, NewHope512, NewHopeCiphertext, NewHopePublicKey, NewHopeSecretKey};
use crate::hash::hash256;
use crate::DecapsStatus;
use lattica_api::traits::serialize::{Serialize, SerializeSecret};
use lattica_api::Kem;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

#[test]
fn test_newhope512_keygen_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = NewHope512::keypair(&mut rng).unwrap();
    assert_eq!(pk.as_ref().len(), 928);
    assert_eq!(sk.to_bytes_zeroizing().len(), 1888);
}

#[test]
fn test_newhope1024_keygen_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = NewHope1024::keypair(&mut rng).unwrap();
    assert_eq!(pk.as_ref().len(), 1824);
    assert_eq!(sk.to_bytes_zeroizing().len(), 3680);
}

#[test]
fn test_newhope512_encaps_decaps() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = NewHope512::keypair(&mut rng).unwrap();

    let (ct, ss1) = NewHope512::encapsulate(&mut rng, &pk).unwrap();
    assert_eq!(ct.as_ref().len(), 1088);
    assert_eq!(ss1.as_ref().len(), NEWHOPE_SS_BYTES);

    let ss2 = NewHope512::decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn test_newhope1024_encaps_decaps() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = NewHope1024::keypair(&mut rng).unwrap();

    let (ct, ss1) = NewHope1024::encapsulate(&mut rng, &pk).unwrap();
    assert_eq!(ct.as_ref().len(), 2176);

    let ss2 = NewHope1024::decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn test_checked_decaps_reports_success() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let (pk, sk) = NewHope1024::keypair(&mut rng).unwrap();
    let (ct, ss1) = NewHope1024::encapsulate(&mut rng, &pk).unwrap();

    let (ss2, status) = NewHope1024::decapsulate_checked(&sk, &ct).unwrap();
    assert_eq!(status, DecapsStatus::Success);
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn test_tampered_ciphertext_implicitly_rejects() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let (pk, sk) = NewHope512::keypair(&mut rng).unwrap();
    let (mut ct, ss1) = NewHope512::encapsulate(&mut rng, &pk).unwrap();

    ct.as_mut()[0] ^= 0x01;

    let (ss2, status) = NewHope512::decapsulate_checked(&sk, &ct).unwrap();
    assert_eq!(status, DecapsStatus::AuthFail);
    assert_ne!(ss1.as_ref(), ss2.as_ref());

    let ss3 = NewHope512::decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss2.as_ref(), ss3.as_ref());
}

#[test]
fn test_bit_flip_at_any_position_rejects() {
    let mut rng = ChaChaRng::seed_from_u64(12);
    let (pk, sk) = NewHope512::keypair(&mut rng).unwrap();
    let (ct, ss1) = NewHope512::encapsulate(&mut rng, &pk).unwrap();

    // Sample byte positions across the whole ciphertext, covering both
    // the u and v components.
    for pos in (0..ct.as_ref().len()).step_by(131) {
        let mut tampered = ct.clone();
        tampered.as_mut()[pos] ^= 0x04;

        let (ss2, status) = NewHope512::decapsulate_checked(&sk, &tampered).unwrap();
        assert_eq!(status, DecapsStatus::AuthFail, "byte {}", pos);
        assert_eq!(ss2.as_ref().len(), NEWHOPE_SS_BYTES);
        assert_ne!(ss1.as_ref(), ss2.as_ref(), "byte {}", pos);
    }
}

#[test]
fn test_rejection_secret_is_deterministic() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let (pk, sk) = NewHope512::keypair(&mut rng).unwrap();
    let (mut ct, _) = NewHope512::encapsulate(&mut rng, &pk).unwrap();
    ct.as_mut()[100] ^= 0xff;

    let (ss1, s1) = NewHope512::decapsulate_checked(&sk, &ct).unwrap();
    let (ss2, s2) = NewHope512::decapsulate_checked(&sk, &ct).unwrap();
    assert_eq!(s1, DecapsStatus::AuthFail);
    assert_eq!(s2, DecapsStatus::AuthFail);
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn test_public_key_serialization_roundtrip() {
    let mut rng = ChaChaRng::seed_from_u64(4);
    let (pk, _) = NewHope512::keypair(&mut rng).unwrap();

    let restored = NewHopePublicKey::<NewHope512ParamsImpl>::from_bytes(&pk.to_bytes()).unwrap();
    assert_eq!(pk.as_ref(), restored.as_ref());
}

#[test]
fn test_secret_key_serialization_roundtrip() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let (pk, sk) = NewHope1024::keypair(&mut rng).unwrap();
    let (ct, ss1) = NewHope1024::encapsulate(&mut rng, &pk).unwrap();

    let bytes = sk.to_bytes_zeroizing();
    let restored = NewHopeSecretKey::<NewHope1024ParamsImpl>::from_bytes(&bytes).unwrap();
    assert_eq!(restored.to_bytes_zeroizing(), bytes);

    let ss2 = NewHope1024::decapsulate(&restored, &ct).unwrap();
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn test_ciphertext_serialization_roundtrip() {
    let mut rng = ChaChaRng::seed_from_u64(6);
    let (pk, sk) = NewHope512::keypair(&mut rng).unwrap();
    let (ct, ss1) = NewHope512::encapsulate(&mut rng, &pk).unwrap();

    let restored = NewHopeCiphertext::<NewHope512ParamsImpl>::from_bytes(&ct.to_bytes()).unwrap();
    let ss2 = NewHope512::decapsulate(&sk, &restored).unwrap();
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn test_from_bytes_rejects_wrong_lengths() {
    assert!(NewHopePublicKey::<NewHope512ParamsImpl>::from_bytes(&[0u8; 100]).is_err());
    assert!(NewHopeSecretKey::<NewHope512ParamsImpl>::from_bytes(&[0u8; 100]).is_err());
    assert!(NewHopeCiphertext::<NewHope512ParamsImpl>::from_bytes(&[0u8; 100]).is_err());
    assert!(NewHopePublicKey::<NewHope512ParamsImpl>::from_bytes(&[0u8; 929]).is_err());
    assert!(NewHopeCiphertext::<NewHope1024ParamsImpl>::from_bytes(&[0u8; 2175]).is_err());
}

#[test]
fn test_secret_key_layout_embeds_pk_hash() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let (pk, sk) = NewHope512::keypair(&mut rng).unwrap();

    let sk_bytes = sk.to_bytes_zeroizing();
    let hash_start =
        NewHope512ParamsImpl::POLY_BYTES + NewHope512ParamsImpl::PUBLIC_KEY_BYTES;
    assert_eq!(
        &sk_bytes[hash_start..hash_start + 32],
        hash256(pk.as_ref()).as_slice()
    );
    assert_eq!(
        &sk_bytes[NewHope512ParamsImpl::POLY_BYTES..hash_start],
        pk.as_ref()
    );
}

#[test]
fn test_seeded_rng_reproduces_all_outputs() {
    let mut rng1 = ChaChaRng::seed_from_u64(99);
    let mut rng2 = ChaChaRng::seed_from_u64(99);

    let (pk1, sk1) = NewHope512::keypair(&mut rng1).unwrap();
    let (pk2, sk2) = NewHope512::keypair(&mut rng2).unwrap();
    assert_eq!(pk1.as_ref(), pk2.as_ref());
    assert_eq!(sk1.to_bytes_zeroizing(), sk2.to_bytes_zeroizing());

    let (ct1, ss1) = NewHope512::encapsulate(&mut rng1, &pk1).unwrap();
    let (ct2, ss2) = NewHope512::encapsulate(&mut rng2, &pk2).unwrap();
    assert_eq!(ct1.as_ref(), ct2.as_ref());
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn test_decaps_with_wrong_keypair_rejects() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let (pk_a, _sk_a) = NewHope1024::keypair(&mut rng).unwrap();
    let (_pk_b, sk_b) = NewHope1024::keypair(&mut rng).unwrap();

    let (ct, ss1) = NewHope1024::encapsulate(&mut rng, &pk_a).unwrap();
    let (ss2, status) = NewHope1024::decapsulate_checked(&sk_b, &ct).unwrap();
    assert_eq!(status, DecapsStatus::AuthFail);
    assert_ne!(ss1.as_ref(), ss2.as_ref());
}
