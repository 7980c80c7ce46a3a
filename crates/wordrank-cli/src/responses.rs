//! JSON response shapes for the `encode`, `decode`, and `info` commands.

use serde::Serialize;

/// Message for rejected `encode` input.
pub const INVALID_TEXT_MESSAGE: &str = "Invalid input. Please provide a text string.";

/// Message for rejected `decode` input; malformed or negative token ids.
pub const INVALID_TOKENS_MESSAGE: &str =
    "Invalid input. Please provide an array of positive integers.";

/// Message for token sequences which fail to decode.
pub const DECODE_FAILED_MESSAGE: &str = "Failed to decode tokens. Invalid token sequence.";

/// `encode` result.
#[derive(Serialize, Debug, PartialEq)]
pub struct EncodeResponse<'a> {
    pub tokens: &'a [u32],
    #[serde(rename = "tokenCount")]
    pub token_count: usize,
    pub text: &'a str,
}

/// `decode` result.
#[derive(Serialize, Debug, PartialEq)]
pub struct DecodeResponse<'a> {
    pub text: &'a str,
    pub tokens: &'a [u32],
    #[serde(rename = "tokenCount")]
    pub token_count: usize,
}

/// Failure report.
#[derive(Serialize, Debug, PartialEq)]
pub struct ErrorResponse<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Endpoints {
    #[serde(rename = "POST /encode")]
    pub encode: &'static str,
    #[serde(rename = "POST /decode")]
    pub decode: &'static str,
}

/// `info` capability description.
#[derive(Serialize, Debug, PartialEq)]
pub struct InfoResponse {
    pub message: &'static str,
    pub endpoints: Endpoints,
    pub encoding: &'static str,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self {
            message: "O200k Tokenizer API",
            endpoints: Endpoints {
                encode: "Encode text to tokens",
                decode: "Decode tokens to text",
            },
            encoding: wordrank::pretrained::O200K_ENCODING_NAME,
        }
    }
}
