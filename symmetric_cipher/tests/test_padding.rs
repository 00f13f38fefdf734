mod common;

use common::{FailingEntropy, FixedEntropy};
use symmetric_cipher::crypto::cipher_types::PaddingMode;
use symmetric_cipher::crypto::error::CipherError;
use symmetric_cipher::crypto::padding::{apply_padding, remove_padding};

const ENTROPY: FixedEntropy = FixedEntropy(0xAB);

#[test]
fn test_pkcs7_partial_block() {
    let padded = apply_padding(vec![1, 2, 3, 4, 5], 8, PaddingMode::PKCS7, &ENTROPY).unwrap();
    assert_eq!(padded, vec![1, 2, 3, 4, 5, 3, 3, 3]);
    assert_eq!(remove_padding(padded, 8, PaddingMode::PKCS7).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_pkcs7_aligned_input_gets_full_block() {
    let padded = apply_padding(vec![7; 8], 8, PaddingMode::PKCS7, &ENTROPY).unwrap();
    assert_eq!(padded.len(), 16);
    assert!(padded[8..].iter().all(|&b| b == 8));
}

#[test]
fn test_ansi_x923_layout() {
    let padded = apply_padding(vec![0xEE; 5], 8, PaddingMode::ANSI_X923, &ENTROPY).unwrap();
    assert_eq!(padded, vec![0xEE, 0xEE, 0xEE, 0xEE, 0xEE, 0x00, 0x00, 0x03]);
    assert_eq!(remove_padding(padded, 8, PaddingMode::ANSI_X923).unwrap(), vec![0xEE; 5]);
}

#[test]
fn test_iso10126_uses_entropy_for_filler() {
    let padded = apply_padding(vec![1], 8, PaddingMode::ISO10126, &ENTROPY).unwrap();
    assert_eq!(padded, vec![1, 0xAB, 0xAB, 0xAB, 0xAB, 0xAB, 0xAB, 0x07]);
    assert_eq!(remove_padding(padded, 8, PaddingMode::ISO10126).unwrap(), vec![1]);
}

#[test]
fn test_iso10126_reports_missing_entropy() {
    assert!(matches!(
        apply_padding(vec![1], 8, PaddingMode::ISO10126, &FailingEntropy),
        Err(CipherError::RandomnessUnavailable(_))
    ));
}

#[test]
fn test_zeros_aligned_is_unchanged() {
    let data = vec![9; 16];
    assert_eq!(apply_padding(data.clone(), 16, PaddingMode::Zeros, &ENTROPY).unwrap(), data);
}

#[test]
fn test_zeros_strip_eats_trailing_message_zeros() {
    let padded = apply_padding(vec![1, 0], 4, PaddingMode::Zeros, &ENTROPY).unwrap();
    assert_eq!(padded, vec![1, 0, 0, 0]);
    assert_eq!(remove_padding(padded, 4, PaddingMode::Zeros).unwrap(), vec![1]);
}

#[test]
fn test_empty_input_pads_to_one_block() {
    for padding in [PaddingMode::ANSI_X923, PaddingMode::PKCS7, PaddingMode::ISO10126] {
        let padded = apply_padding(Vec::new(), 8, padding, &ENTROPY).unwrap();
        assert_eq!(padded.len(), 8, "{padding}");
        assert!(remove_padding(padded, 8, padding).unwrap().is_empty(), "{padding}");
    }
    assert!(apply_padding(Vec::new(), 8, PaddingMode::Zeros, &ENTROPY).unwrap().is_empty());
}

#[test]
fn test_rejects_zero_length_byte() {
    let data = vec![1, 2, 3, 4, 5, 6, 7, 0];
    for padding in [PaddingMode::ANSI_X923, PaddingMode::PKCS7, PaddingMode::ISO10126] {
        assert!(matches!(
            remove_padding(data.clone(), 8, padding),
            Err(CipherError::InvalidPadding(_))
        ));
    }
}

#[test]
fn test_rejects_length_byte_beyond_block() {
    let data = vec![9; 16];
    assert!(matches!(
        remove_padding(data, 8, PaddingMode::PKCS7),
        Err(CipherError::InvalidPadding(_))
    ));
}

#[test]
fn test_rejects_length_byte_beyond_data() {
    assert!(matches!(
        remove_padding(vec![1, 2, 6], 8, PaddingMode::ISO10126),
        Err(CipherError::InvalidPadding(_))
    ));
}

#[test]
fn test_rejects_inconsistent_pkcs7() {
    let data = vec![1, 2, 3, 4, 5, 3, 2, 3];
    assert!(matches!(
        remove_padding(data, 8, PaddingMode::PKCS7),
        Err(CipherError::InvalidPadding(_))
    ));
}

#[test]
fn test_rejects_nonzero_ansi_filler() {
    let data = vec![1, 2, 3, 4, 5, 0, 1, 3];
    assert!(matches!(
        remove_padding(data, 8, PaddingMode::ANSI_X923),
        Err(CipherError::InvalidPadding(_))
    ));
}

#[test]
fn test_every_corrupted_filler_byte_is_rejected() {
    for padding in [PaddingMode::PKCS7, PaddingMode::ANSI_X923] {
        let padded = apply_padding(vec![1, 2, 3], 8, padding, &ENTROPY).unwrap();
        assert_eq!(padded.len(), 8);

        for i in 3..7 {
            let mut corrupted = padded.clone();
            corrupted[i] ^= 0x40;
            assert!(
                matches!(
                    remove_padding(corrupted, 8, padding),
                    Err(CipherError::InvalidPadding(_))
                ),
                "{padding:?} filler byte {i}"
            );
        }
    }
}

#[test]
fn test_block_size_limits() {
    assert!(apply_padding(vec![1], 0, PaddingMode::PKCS7, &ENTROPY).is_err());
    assert!(apply_padding(vec![1], 256, PaddingMode::PKCS7, &ENTROPY).is_err());
}

#[test]
fn test_padding_tokens() {
    for padding in PaddingMode::ALL {
        assert_eq!(padding.token().parse::<PaddingMode>().unwrap(), padding);
    }
    assert_eq!(
        "OAEP".parse::<PaddingMode>(),
        Err(CipherError::UnsupportedPadding("OAEP".into()))
    );
}
