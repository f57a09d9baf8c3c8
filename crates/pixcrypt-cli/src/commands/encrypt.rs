use std::path::PathBuf;

use clap::Args;
use pixcrypt_core::api::Direction;
use pixcrypt_core::CipherOptions;

use crate::cli::CipherArgs;
use crate::CliResult;

/// Scrambles an image file
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Image to scramble, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Scrambled image will be stored as file, defaults to <name>_encrypted.<ext>
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub cipher: CipherArgs,
}

impl EncryptArgs {
    pub fn run(self) -> CliResult<()> {
        let options = CipherOptions::from(self.cipher);
        let written =
            pixcrypt_core::commands::encrypt(&self.image, self.output.as_deref(), options)?;
        super::print_success(Direction::Encrypt, &written, options.method);

        Ok(())
    }
}
