use std::io::{BufRead, Write};

use wordrank::{TokenDecoder, TokenEncoder, Tokenizer, Utf8Policy};

use crate::{
    commands::{decode::parse_tokens, encode::write_tokens},
    input_output::{InputArgs, OutputArgs},
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
    vocab_source::VocabSourceArgs,
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    vocab: VocabSourceArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.vocab.load_tokenizer(Utf8Policy::Strict)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(&mut reader, &mut writer, &tokenizer)?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &tokenizer)?,
        }

        Ok(())
    }
}

/// Encode each input line, keeping line endings, to a line of tokens.
fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let tokens = tokenizer.try_encode(&line)?;
        write_tokens(writer, &tokens)?;
        writer.flush()?;
        line.clear();
    }
    Ok(())
}

/// Decode each line of tokens, writing the raw bytes.
///
/// Lines are decoded to bytes, so a character split across lines survives.
fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = parse_tokens(&line?)?;
        let bytes = tokenizer.try_decode_to_bytes(&tokens)?;

        writer.write_all(&bytes)?;
        writer.flush()?;
    }
    Ok(())
}
