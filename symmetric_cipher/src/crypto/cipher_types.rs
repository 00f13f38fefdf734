use crate::crypto::error::CipherError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CipherMode {
    ECB,
    CBC,
    PCBC,
    CFB,
    OFB,
    CTR,
    RandomDelta,
    /// Raw block transform: no chaining and no padding.
    None,
}

impl CipherMode {
    pub const ALL: [CipherMode; 8] = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::PCBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
        CipherMode::RandomDelta,
        CipherMode::None,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
            CipherMode::PCBC => "PCBC",
            CipherMode::CFB => "CFB",
            CipherMode::OFB => "OFB",
            CipherMode::CTR => "CTR",
            CipherMode::RandomDelta => "RD",
            CipherMode::None => "NONE",
        }
    }

    /// Whether the mode chains through an IV / initial counter.
    pub fn requires_iv(&self) -> bool {
        !matches!(self, CipherMode::ECB | CipherMode::None)
    }

    pub fn is_padded(&self) -> bool {
        !matches!(self, CipherMode::None)
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherMode::ALL
            .into_iter()
            .find(|mode| mode.token() == s)
            .ok_or_else(|| CipherError::UnsupportedMode(s.to_string()))
    }
}

#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    Zeros,
    ANSI_X923,
    PKCS7,
    ISO10126,
}

impl PaddingMode {
    pub const ALL: [PaddingMode; 4] = [
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            PaddingMode::Zeros => "Zeros",
            PaddingMode::ANSI_X923 => "ANSIX923",
            PaddingMode::PKCS7 => "PKCS7",
            PaddingMode::ISO10126 => "ISO10126",
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaddingMode::ALL
            .into_iter()
            .find(|padding| padding.token() == s)
            .ok_or_else(|| CipherError::UnsupportedPadding(s.to_string()))
    }
}
