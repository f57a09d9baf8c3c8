use std::path::PathBuf;

use clap::Args;
use pixcrypt_core::api::Direction;
use pixcrypt_core::CipherOptions;

use crate::cli::CipherArgs;
use crate::CliResult;

/// Restores an image scrambled with the same key and method
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Scrambled image, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Restored image will be stored as file, defaults to <name>_decrypted.<ext>
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub cipher: CipherArgs,
}

impl DecryptArgs {
    pub fn run(self) -> CliResult<()> {
        let options = CipherOptions::from(self.cipher);
        let written =
            pixcrypt_core::commands::decrypt(&self.image, self.output.as_deref(), options)?;
        super::print_success(Direction::Decrypt, &written, options.method);

        Ok(())
    }
}
