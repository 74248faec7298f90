//! Integration tests exercising the facade API across all KEM variants.

use lattica::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn roundtrip<K: Kem>() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let keypair = K::keypair(&mut rng).unwrap();
    let pk = K::public_key(&keypair);
    let sk = K::secret_key(&keypair);
    let (ct, ss_sender) = K::encapsulate(&mut rng, &pk).unwrap();
    let ss_receiver = K::decapsulate(&sk, &ct).unwrap();
    assert_eq!(
        ss_sender.to_bytes_zeroizing(),
        ss_receiver.to_bytes_zeroizing(),
        "{} shared secrets diverged",
        K::name()
    );
}

#[test]
fn all_variants_roundtrip() {
    roundtrip::<Kyber512>();
    roundtrip::<Kyber768>();
    roundtrip::<Kyber1024>();
    roundtrip::<NewHope512>();
    roundtrip::<NewHope1024>();
}

#[test]
fn keys_roundtrip_through_serialization() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let (pk, sk) = Kyber768::keypair(&mut rng).unwrap();

    let pk2 =
        <Kyber768 as Kem>::PublicKey::from_bytes(&pk.to_bytes()).expect("public key roundtrip");
    let sk2 = <Kyber768 as Kem>::SecretKey::from_bytes(&sk.to_bytes_zeroizing())
        .expect("secret key roundtrip");

    let (ct, ss1) = Kyber768::encapsulate(&mut rng, &pk2).unwrap();
    let ss2 = Kyber768::decapsulate(&sk2, &ct).unwrap();
    assert_eq!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn tampering_is_implicitly_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(9);
    let (pk, sk) = NewHope1024::keypair(&mut rng).unwrap();
    let (ct, ss1) = NewHope1024::encapsulate(&mut rng, &pk).unwrap();

    let mut bytes = ct.to_bytes();
    bytes[17] ^= 0x80;
    let tampered = <NewHope1024 as Kem>::Ciphertext::from_bytes(&bytes).unwrap();

    let (ss2, status) = NewHope1024::decapsulate_checked(&sk, &tampered).unwrap();
    assert_eq!(status, DecapsStatus::AuthFail);
    assert_ne!(ss1.as_ref(), ss2.as_ref());
}

#[test]
fn algorithm_names() {
    assert_eq!(Kyber512::name(), "Kyber-512");
    assert_eq!(Kyber768::name(), "Kyber-768");
    assert_eq!(Kyber1024::name(), "Kyber-1024");
    assert_eq!(NewHope512::name(), "NewHope-512");
    assert_eq!(NewHope1024::name(), "NewHope-1024");
}
