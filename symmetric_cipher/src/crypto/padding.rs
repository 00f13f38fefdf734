use crate::crypto::cipher_types::PaddingMode;
use crate::crypto::error::{CipherError, CipherResult};
use crate::crypto::random::EntropySource;

/// Pads `data` up to a multiple of `block_size`.
///
/// Zeros leaves block-aligned data as is; every other scheme appends a whole
/// block in that case so the strip side can always find the length byte.
pub fn apply_padding(
    mut data: Vec<u8>,
    block_size: usize,
    padding: PaddingMode,
    entropy: &dyn EntropySource,
) -> CipherResult<Vec<u8>> {
    if block_size == 0 || block_size > usize::from(u8::MAX) {
        return Err(CipherError::InvalidPadding(
            "block size must be between 1 and 255 bytes",
        ));
    }

    let remainder = data.len() % block_size;
    if remainder == 0 && padding == PaddingMode::Zeros {
        return Ok(data);
    }
    let padding_length = block_size - remainder;

    match padding {
        PaddingMode::Zeros => data.resize(data.len() + padding_length, 0),
        PaddingMode::ANSI_X923 => {
            data.resize(data.len() + padding_length - 1, 0);
            data.push(padding_length as u8);
        }
        PaddingMode::PKCS7 => {
            data.resize(data.len() + padding_length, padding_length as u8);
        }
        PaddingMode::ISO10126 => {
            let start = data.len();
            data.resize(start + padding_length - 1, 0);
            entropy.try_fill(&mut data[start..])?;
            data.push(padding_length as u8);
        }
    }
    Ok(data)
}

/// Strips padding applied by [`apply_padding`].
///
/// Zeros cannot tell padding from trailing zero bytes of the message and
/// ISO 10126 can only check the length byte.
pub fn remove_padding(
    mut data: Vec<u8>,
    block_size: usize,
    padding: PaddingMode,
) -> CipherResult<Vec<u8>> {
    let Some(&last_byte) = data.last() else {
        return Ok(data);
    };

    if padding == PaddingMode::Zeros {
        let kept = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        data.truncate(kept);
        return Ok(data);
    }

    let pad_len = usize::from(last_byte);
    if pad_len == 0 || pad_len > data.len() || pad_len > block_size {
        return Err(CipherError::InvalidPadding("padding length out of range"));
    }
    let pad_start = data.len() - pad_len;

    match padding {
        PaddingMode::ANSI_X923 => {
            if data[pad_start..data.len() - 1].iter().any(|&b| b != 0) {
                return Err(CipherError::InvalidPadding("ANSI X.923 filler bytes are not zero"));
            }
        }
        PaddingMode::PKCS7 => {
            if data[pad_start..].iter().any(|&b| b != last_byte) {
                return Err(CipherError::InvalidPadding("PKCS7 padding bytes disagree"));
            }
        }
        PaddingMode::ISO10126 | PaddingMode::Zeros => {}
    }

    data.truncate(pad_start);
    Ok(data)
}
