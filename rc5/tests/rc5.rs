use hex_literal::hex;
use quickcheck::quickcheck;
use rc5::Rc5;
use symmetric_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use symmetric_cipher::crypto::error::CipherError;

#[test]
fn test_zero_key_vector() {
    let rc5 = Rc5::new(&[0u8; 16]).unwrap();
    let ciphertext = rc5.encrypt_block(&[0u8; 8]).unwrap();
    assert_eq!(ciphertext, hex!("21 A5 DB EE 15 4B 8F 6D"));
    assert_eq!(rc5.decrypt_block(&ciphertext).unwrap(), [0u8; 8]);
}

#[test]
fn test_chained_vector() {
    let rc5 = Rc5::new(&hex!("91 5F 46 19 BE 41 B2 51 63 55 A5 01 10 A9 CE 91")).unwrap();
    let plaintext = hex!("21 A5 DB EE 15 4B 8F 6D");
    let ciphertext = rc5.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, hex!("F7 C0 13 AC 5B 2B 89 52"));
    assert_eq!(rc5.decrypt_block(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_multi_block_buffer() {
    let rc5 = Rc5::new(b"sixteen byte key").unwrap();
    let data: Vec<u8> = (0u8..64).collect();
    let ciphertext = rc5.encrypt(&data).unwrap();
    assert_ne!(ciphertext, data);
    assert_eq!(rc5.decrypt(&ciphertext).unwrap(), data);
}

#[test]
fn test_rejects_wrong_block_size() {
    let rc5 = Rc5::new(&[0u8; 16]).unwrap();
    for len in [0, 7, 9, 16] {
        assert_eq!(
            rc5.encrypt_block(&vec![0u8; len]),
            Err(CipherError::InvalidBlockSize { expected: 8, actual: len })
        );
        assert!(rc5.decrypt_block(&vec![0u8; len]).is_err());
    }
}

#[test]
fn test_rejects_wrong_key_length() {
    for len in [0, 8, 15, 17, 32] {
        assert!(matches!(
            Rc5::new(&vec![0u8; len]),
            Err(CipherError::InvalidKeyLength { algorithm: "RC5", actual, .. }) if actual == len
        ));
    }
}

#[test]
fn test_block_size_and_name() {
    let rc5 = Rc5::new(&[7u8; 16]).unwrap();
    assert_eq!(rc5.block_size(), 8);
    assert_eq!(rc5.name(), "RC5");
}

quickcheck! {
    fn prop_decrypt_inverts_encrypt(key: Vec<u8>, block: u64) -> bool {
        let mut key = key;
        key.resize(16, 0xA5);
        let rc5 = Rc5::new(&key).unwrap();
        let block = block.to_le_bytes();
        rc5.decrypt_block(&rc5.encrypt_block(&block).unwrap()).unwrap() == block
    }
}
