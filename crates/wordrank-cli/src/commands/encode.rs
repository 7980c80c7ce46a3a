use std::io::Write;

use wordrank::{TokenEncoder, Utf8Policy};

use crate::{
    commands::report_failure,
    input_output::{InputArgs, OutputArgs},
    responses::{EncodeResponse, INVALID_TEXT_MESSAGE},
    vocab_source::VocabSourceArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab: VocabSourceArgs,

    /// Text to encode; otherwise the whole input is encoded.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Write a JSON response object.
    #[arg(long)]
    json: bool,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let text = match &self.text {
            Some(text) => text.clone(),
            None => self.input.read_to_string()?,
        };

        let mut writer = self.output.open_writer()?;

        if text.is_empty() {
            return report_failure(&mut writer, self.json, INVALID_TEXT_MESSAGE, None);
        }

        let tokenizer = self.vocab.load_tokenizer(Utf8Policy::Strict)?;
        let tokens = tokenizer.try_encode(&text)?;

        if self.json {
            let resp = EncodeResponse {
                tokens: &tokens,
                token_count: tokens.len(),
                text: &text,
            };
            serde_json::to_writer(&mut writer, &resp)?;
            writeln!(writer)?;
        } else {
            write_tokens(&mut writer, &tokens)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Write space-separated tokens, and a newline.
pub fn write_tokens(
    writer: &mut dyn Write,
    tokens: &[u32],
) -> std::io::Result<()> {
    for (idx, token) in tokens.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
    }
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;
    use crate::commands::testing::{read_output, write_test_vocab};

    #[derive(clap::Parser, Debug)]
    struct EncodeCli {
        #[command(flatten)]
        args: EncodeArgs,
    }

    /// Run `encode` over `input` with the test vocab; returns the result and the written output.
    fn run_encode(
        input: &str,
        extra: &[&str],
    ) -> (Result<(), Box<dyn std::error::Error>>, String) {
        let dir = tempdir::TempDir::new("wordrank_encode").unwrap();
        let vocab = write_test_vocab(dir.path());
        let input_path = dir.path().join("in.txt");
        fs::write(&input_path, input).unwrap();
        let output = dir.path().join("out.txt");

        let mut argv = vec![
            "encode",
            "--vocab",
            vocab.to_str().unwrap(),
            "--input",
            input_path.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);

        let cli = EncodeCli::try_parse_from(argv).unwrap();
        let result = cli.args.run();
        (result, read_output(&output))
    }

    #[test]
    fn test_run_json() {
        let (result, out) = run_encode("hello world", &["--json"]);
        result.unwrap();
        assert_eq!(out, "{\"tokens\":[256,257],\"tokenCount\":2,\"text\":\"hello world\"}\n");
    }

    #[test]
    fn test_run_plain() {
        let (result, out) = run_encode("hello world!", &[]);
        result.unwrap();
        assert_eq!(out, "256 257 33\n");
    }

    #[test]
    fn test_run_empty_text() {
        let (result, out) = run_encode("", &["--json"]);
        assert_eq!(result.unwrap_err().to_string(), INVALID_TEXT_MESSAGE);
        assert_eq!(out, "{\"error\":\"Invalid input. Please provide a text string.\"}\n");
    }

    #[test]
    fn test_text_conflicts_with_input() {
        assert!(
            EncodeCli::try_parse_from(["encode", "--text", "a", "--input", "b.txt"]).is_err()
        );
    }

    #[test]
    fn test_write_tokens() {
        let mut buf: Vec<u8> = Vec::new();
        write_tokens(&mut buf, &[13225, 11, 2375, 0]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "13225 11 2375 0\n");

        let mut buf: Vec<u8> = Vec::new();
        write_tokens(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\n");
    }
}
