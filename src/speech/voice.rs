//! Narration voice selection

use crate::FiresideError;
use std::str::FromStr;

/// Narration voice, a closed set of two locale options
///
/// The built-in stories are Chinese, so the Mandarin voice is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voice {
    /// Mandarin Chinese (zh-CN)
    #[default]
    Chinese,
    /// US English (en-US)
    English,
}

impl Voice {
    /// BCP 47 locale tag handed to the speech engine
    pub fn locale(&self) -> &'static str {
        match self {
            Voice::Chinese => "zh-CN",
            Voice::English => "en-US",
        }
    }

    /// Sentence-ending separator used when joining paragraphs into one
    /// utterance, so the engine pauses between them
    pub fn separator(&self) -> &'static str {
        match self {
            Voice::Chinese => "。",
            Voice::English => ". ",
        }
    }
}

impl FromStr for Voice {
    type Err = FiresideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "chinese" => Ok(Voice::Chinese),
            "en" | "en-us" | "english" => Ok(Voice::English),
            other => Err(FiresideError::InvalidInput(format!("unknown voice: {}", other))),
        }
    }
}
