mod common;

use chat_crypto::key_material::{decode_key_material, decode_public_key};
use chat_crypto::{
    Algorithm, CryptoConfig, EncryptionService, InMemoryKeyStore, ServiceError,
    encode_public_key, shared_key_material,
};
use common::{ALICE, BOB, CHAT, init_logger, message};
use dh_crypto::{DhError, DhParameters, DiffieHellman, KeyExchangeAlgorithm};
use rand::rngs::OsRng;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};

const KEY_BYTES: usize = 32;

#[tokio::test]
async fn both_parties_derive_the_same_chat_key() {
    init_logger();
    let dh = DiffieHellman::new(DhParameters::rfc3526_group14()).unwrap();
    let alice = dh.generate_keypair(&mut OsRng).unwrap();
    let bob = dh.generate_keypair(&mut OsRng).unwrap();

    let alice_public = encode_public_key(&alice.public_key);
    let bob_public = encode_public_key(&bob.public_key);
    assert_eq!(decode_public_key(&alice_public).unwrap(), alice.public_key);

    let alice_view = shared_key_material(&dh, &alice.private_key, &bob_public, KEY_BYTES).unwrap();
    let bob_view = shared_key_material(&dh, &bob.private_key, &alice_public, KEY_BYTES).unwrap();
    assert_eq!(alice_view, bob_view);
    assert_eq!(decode_key_material(&alice_view).unwrap().len(), KEY_BYTES);

    let alice_store = InMemoryKeyStore::new();
    alice_store.insert(CHAT, BOB, alice_view);
    let bob_store = InMemoryKeyStore::new();
    bob_store.insert(CHAT, ALICE, bob_view);
    let alice_service = EncryptionService::new(alice_store);
    let bob_service = EncryptionService::new(bob_store);

    for algorithm in Algorithm::ALL {
        let config = CryptoConfig::new(algorithm, CipherMode::PCBC, PaddingMode::PKCS7);
        let data = message(77);
        let sealed = alice_service.encrypt(&data, &config, CHAT, BOB).await.unwrap();
        let opened = bob_service.decrypt(&sealed, &config, CHAT, ALICE).await.unwrap();
        assert_eq!(opened, data);
    }
}

#[test]
fn generated_parameters_from_config_support_an_exchange() {
    let config = CryptoConfig::default()
        .with_dh_prime_bits(64)
        .with_miller_rabin_rounds(10);
    let params = config
        .parameter_generator()
        .generate(config.dh_prime_bits, &mut OsRng)
        .unwrap();
    assert_eq!(params.p.bits(), 64);

    let dh = DiffieHellman::new(params).unwrap();
    let alice = dh.generate_keypair(&mut OsRng).unwrap();
    let bob = dh.generate_keypair(&mut OsRng).unwrap();

    let a = dh.compute_shared_secret(&alice.private_key, &bob.public_key).unwrap();
    let b = dh.compute_shared_secret(&bob.private_key, &alice.public_key).unwrap();
    assert_eq!(a, b);
}

#[test]
fn out_of_range_peer_key_is_refused() {
    let dh = DiffieHellman::new(DhParameters::rfc3526_group14()).unwrap();
    let alice = dh.generate_keypair(&mut OsRng).unwrap();

    let err = shared_key_material(&dh, &alice.private_key, "AQ==", KEY_BYTES).unwrap_err();
    assert!(matches!(err, ServiceError::KeyExchange(DhError::InvalidKey(_))));
}
