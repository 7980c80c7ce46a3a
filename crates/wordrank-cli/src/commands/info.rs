use std::io::Write;

use crate::{input_output::OutputArgs, responses::InfoResponse};

/// Args for the info command.
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    output: OutputArgs,
}

impl InfoArgs {
    /// Run the info command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;
        serde_json::to_writer_pretty(&mut writer, &InfoResponse::default())?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
