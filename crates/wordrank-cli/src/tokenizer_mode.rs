/// The streaming direction of the `cat` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Encode lines of text into lines of tokens.
    Encode,

    /// Decode lines of tokens into text.
    Decode,
}

/// Tokenizer mode argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to tokens.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        // The arg group requires exactly one flag.
        debug_assert!(self.encode ^ self.decode);
        if self.encode {
            TokenizerMode::Encode
        } else {
            TokenizerMode::Decode
        }
    }
}
