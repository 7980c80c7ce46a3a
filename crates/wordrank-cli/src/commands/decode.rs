use std::io::Write;

use wordrank::{TokenDecoder, Utf8Policy};

use crate::{
    commands::report_failure,
    input_output::{InputArgs, OutputArgs},
    responses::{DECODE_FAILED_MESSAGE, DecodeResponse, INVALID_TOKENS_MESSAGE},
    vocab_source::VocabSourceArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    vocab: VocabSourceArgs,

    /// Tokens to decode, as "1 2 3", "1,2,3", or "[1, 2, 3]";
    /// otherwise tokens are read from the input.
    #[arg(long, conflicts_with = "input")]
    tokens: Option<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Write a JSON response object.
    #[arg(long)]
    json: bool,

    /// Replace invalid UTF-8 with U+FFFD, rather than failing.
    #[arg(long)]
    lossy: bool,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let source = match &self.tokens {
            Some(tokens) => tokens.clone(),
            None => self.input.read_to_string()?,
        };

        let mut writer = self.output.open_writer()?;

        let tokens = match parse_tokens(&source) {
            Ok(tokens) => tokens,
            Err(details) => {
                return report_failure(
                    &mut writer,
                    self.json,
                    INVALID_TOKENS_MESSAGE,
                    Some(details),
                );
            }
        };

        let policy = if self.lossy {
            Utf8Policy::Lossy
        } else {
            Utf8Policy::Strict
        };
        let tokenizer = self.vocab.load_tokenizer(policy)?;

        let text = match tokenizer.try_decode_to_string(&tokens) {
            Ok(text) => text,
            Err(err) => {
                return report_failure(
                    &mut writer,
                    self.json,
                    DECODE_FAILED_MESSAGE,
                    Some(err.to_string()),
                );
            }
        };

        if self.json {
            let resp = DecodeResponse {
                text: &text,
                tokens: &tokens,
                token_count: tokens.len(),
            };
            serde_json::to_writer(&mut writer, &resp)?;
            writeln!(writer)?;
        } else {
            write!(writer, "{text}")?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Parse a token list.
///
/// Accepts a JSON array, or integers separated by whitespace and/or commas.
pub fn parse_tokens(source: &str) -> Result<Vec<u32>, String> {
    let source = source.trim();
    if source.starts_with('[') {
        return serde_json::from_str(source).map_err(|err| err.to_string());
    }

    source
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|err| format!("invalid token {s:?}: {err}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::commands::testing::{read_output, write_test_vocab};

    #[derive(clap::Parser, Debug)]
    struct DecodeCli {
        #[command(flatten)]
        args: DecodeArgs,
    }

    /// Run `decode` against the test vocab; returns the result and the written output.
    fn run_decode(extra: &[&str]) -> (Result<(), Box<dyn std::error::Error>>, String) {
        let dir = tempdir::TempDir::new("wordrank_decode").unwrap();
        let vocab = write_test_vocab(dir.path());
        let output = dir.path().join("out.txt");

        let mut argv = vec![
            "decode",
            "--vocab",
            vocab.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);

        let cli = DecodeCli::try_parse_from(argv).unwrap();
        let result = cli.args.run();
        (result, read_output(&output))
    }

    #[test]
    fn test_run_json() {
        let (result, out) = run_decode(&["--tokens", "256 257", "--json"]);
        result.unwrap();
        assert_eq!(out, "{\"text\":\"hello world\",\"tokens\":[256,257],\"tokenCount\":2}\n");

        let (result, out) = run_decode(&["--tokens", "[256, 257]"]);
        result.unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn test_run_invalid_tokens() {
        let (result, out) = run_decode(&["--tokens=1,-2", "--json"]);
        let err = result.unwrap_err().to_string();
        assert!(err.starts_with(INVALID_TOKENS_MESSAGE));
        assert!(err.contains("\"-2\""));
        assert!(out.starts_with(
            "{\"error\":\"Invalid input. Please provide an array of positive integers.\""
        ));
    }

    #[test]
    fn test_run_unknown_token() {
        let (result, out) = run_decode(&["--tokens", "256 999999", "--json"]);
        assert_eq!(
            result.unwrap_err().to_string(),
            format!("{DECODE_FAILED_MESSAGE} (unknown token 999999 at index 1)")
        );
        assert_eq!(
            out,
            concat!(
                "{\"error\":\"Failed to decode tokens. Invalid token sequence.\",",
                "\"details\":\"unknown token 999999 at index 1\"}\n"
            )
        );
    }

    #[test]
    fn test_run_lossy() {
        // Byte 0xff is never valid utf-8.
        let (result, _) = run_decode(&["--tokens", "256 255"]);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with(DECODE_FAILED_MESSAGE)
        );

        let (result, out) = run_decode(&["--tokens", "256 255", "--lossy"]);
        result.unwrap();
        assert_eq!(out, "hello\u{FFFD}");
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse_tokens("13225 2375").unwrap(), vec![13225, 2375]);
        assert_eq!(parse_tokens("13225,2375\n").unwrap(), vec![13225, 2375]);
        assert_eq!(parse_tokens(" [13225, 11, 2375, 0] ").unwrap(), vec![13225, 11, 2375, 0]);
        assert_eq!(parse_tokens("").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_tokens("[]").unwrap(), Vec::<u32>::new());

        assert!(parse_tokens("1 two 3").unwrap_err().contains("\"two\""));
        assert!(parse_tokens("-1").is_err());
        assert!(parse_tokens("[1, \"a\"]").is_err());
    }
}
