use std::{fmt, str::FromStr};

use orcfile_common::error::Error;
use serde::{Deserialize, Serialize};

/// Compression scheme applied to the data blocks of an ORC file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompressionKind {
    None,
    Zlib,
    Snappy,
    Lzo,
    Lz4,
    Zstd,
    Brotli,
}

impl CompressionKind {
    pub const ALL: [CompressionKind; 7] = [
        CompressionKind::None,
        CompressionKind::Zlib,
        CompressionKind::Snappy,
        CompressionKind::Lzo,
        CompressionKind::Lz4,
        CompressionKind::Zstd,
        CompressionKind::Brotli,
    ];

    /// The name used for this kind in ORC file metadata and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionKind::None => "NONE",
            CompressionKind::Zlib => "ZLIB",
            CompressionKind::Snappy => "SNAPPY",
            CompressionKind::Lzo => "LZO",
            CompressionKind::Lz4 => "LZ4",
            CompressionKind::Zstd => "ZSTD",
            CompressionKind::Brotli => "BROTLI",
        }
    }

    pub fn is_compressed(&self) -> bool {
        *self != CompressionKind::None
    }
}

impl fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionKind {
    type Err = Error;

    /// Parses a compression kind name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompressionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_arg("compression", format!("unknown kind '{s}'")))
    }
}
