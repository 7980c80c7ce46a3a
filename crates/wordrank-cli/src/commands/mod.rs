use std::io::Write;

use crate::{
    commands::{cat::CatArgs, decode::DecodeArgs, encode::EncodeArgs, info::InfoArgs},
    responses::ErrorResponse,
};

pub mod cat;
pub mod decode;
pub mod encode;
pub mod info;

/// Subcommands for wordrank.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text to tokens.
    Encode(EncodeArgs),

    /// Decode tokens to text.
    Decode(DecodeArgs),

    /// Describe the tokenizer service.
    Info(InfoArgs),

    /// Act as a streaming tokenizer.
    Cat(CatArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
        }
    }
}

/// Report a failed request; as a JSON error object when `json` is set.
///
/// Always returns the failure as an `Err`, so the process exits non-zero.
fn report_failure(
    writer: &mut dyn Write,
    json: bool,
    message: &str,
    details: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let err = match &details {
        Some(details) => format!("{message} ({details})"),
        None => message.to_string(),
    };

    if json {
        serde_json::to_writer(
            &mut *writer,
            &ErrorResponse {
                error: message,
                details,
            },
        )?;
        writeln!(writer)?;
        writer.flush()?;
    }

    Err(err.into())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{
        fs,
        path::{Path, PathBuf},
    };

    use wordrank::{RankVocab, vocab::io::save_tiktoken_vocab_path};

    /// Ordinal byte ranks, then "hello" (256) and " world" (257).
    pub fn build_test_vocab() -> RankVocab<u32> {
        let pairs = (0..256u32)
            .map(|b| (vec![b as u8], b))
            .chain([(b"hello".to_vec(), 256), (b" world".to_vec(), 257)]);
        RankVocab::try_from_pairs(pairs).unwrap()
    }

    /// Save [`build_test_vocab`] as a tiktoken file under `dir`.
    pub fn write_test_vocab(dir: &Path) -> PathBuf {
        let path = dir.join("test.tiktoken");
        save_tiktoken_vocab_path(&build_test_vocab(), &path).unwrap();
        path
    }

    /// The output file contents; empty if nothing was written.
    pub fn read_output(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::INVALID_TEXT_MESSAGE;

    #[test]
    fn test_report_failure() {
        let mut buf: Vec<u8> = Vec::new();
        let err = report_failure(&mut buf, true, INVALID_TEXT_MESSAGE, None).unwrap_err();
        assert_eq!(err.to_string(), INVALID_TEXT_MESSAGE);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"error\":\"Invalid input. Please provide a text string.\"}\n"
        );

        let mut buf: Vec<u8> = Vec::new();
        let err = report_failure(&mut buf, false, "nope", Some("why".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "nope (why)");
        assert!(buf.is_empty());
    }
}
