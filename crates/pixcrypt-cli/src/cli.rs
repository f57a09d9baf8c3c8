use clap::{Args, Parser, Subcommand};
use pixcrypt_core::{CipherOptions, Method, DEFAULT_KEY};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encrypt(encrypt::EncryptArgs),
    Decrypt(decrypt::DecryptArgs),
    Interactive(interactive::InteractiveArgs),
}

/// Key and method, both sides of a round trip need the same values
#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Secret key, any integer
    #[arg(
        short,
        long,
        value_name = "number",
        default_value_t = DEFAULT_KEY,
        allow_negative_numbers = true
    )]
    pub key: i64,

    /// Scrambling method: xor, swap, math or shuffle
    #[arg(short, long, value_name = "method", default_value = "xor")]
    pub method: Method,
}

impl From<CipherArgs> for CipherOptions {
    fn from(args: CipherArgs) -> Self {
        CipherOptions::new(args.key, args.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_encrypt_with_defaults() {
        let args = CliArgs::try_parse_from(["pixcrypt", "encrypt", "-i", "cat.png"]).unwrap();
        let Commands::Encrypt(encrypt) = args.command else {
            panic!("expected the encrypt command");
        };

        assert_eq!(encrypt.image, std::path::PathBuf::from("cat.png"));
        assert!(encrypt.output.is_none());
        assert_eq!(
            CipherOptions::from(encrypt.cipher),
            CipherOptions::default()
        );
    }

    #[test]
    fn should_parse_negative_keys_and_methods() {
        let args = CliArgs::try_parse_from([
            "pixcrypt", "decrypt", "-i", "a.png", "-o", "b.png", "-k", "-42", "-m", "SHUFFLE",
        ])
        .unwrap();
        let Commands::Decrypt(decrypt) = args.command else {
            panic!("expected the decrypt command");
        };

        assert_eq!(
            CipherOptions::from(decrypt.cipher),
            CipherOptions::new(-42, Method::SHUFFLE)
        );
    }

    #[test]
    fn should_reject_unknown_methods() {
        let result =
            CliArgs::try_parse_from(["pixcrypt", "encrypt", "-i", "a.png", "-m", "rot13"]);
        assert!(result.is_err());
    }
}
