use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, Select};
use log::warn;
use pixcrypt_core::api::Direction;
use pixcrypt_core::{CipherOptions, Key, Method, PixcryptError};

use crate::CliResult;

/// Menu driven session, asks for the key once and then for each image
#[derive(Args, Debug)]
pub struct InteractiveArgs {}

impl InteractiveArgs {
    pub fn run(self) -> CliResult<()> {
        print_banner();
        let key = ask_for_key()?;

        loop {
            let choice = Select::new()
                .with_prompt("Choose an option")
                .items(&["Encrypt Image", "Decrypt Image", "Exit"])
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            match choice {
                0 => process_image(Direction::Encrypt, key)?,
                1 => process_image(Direction::Decrypt, key)?,
                _ => {
                    println!("\nThank you for using Image Encryption Tool!");
                    println!("Exiting...");
                    return Ok(());
                }
            }
        }
    }
}

fn print_banner() {
    println!("\n{}", "=".repeat(60));
    println!("{}IMAGE ENCRYPTION TOOL", " ".repeat(15));
    println!("{}Pixel Manipulation Based Encryption", " ".repeat(10));
    println!("{}\n", "=".repeat(60));
}

/// Empty input takes the default key, anything unparsable falls back to it with a warning.
fn ask_for_key() -> CliResult<Key> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Enter encryption key (any number, default {})",
            Key::default()
        ))
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;

    Ok(parse_key_or_default(&input))
}

fn parse_key_or_default(input: &str) -> Key {
    if input.trim().is_empty() {
        return Key::default();
    }

    input.parse().unwrap_or_else(|_| {
        warn!("unparsable key {input:?}");
        println!("Invalid key! Using default key: {}", Key::default());
        Key::default()
    })
}

fn ask_for_method() -> CliResult<Method> {
    let items: Vec<String> = Method::ALL
        .iter()
        .map(|m| format!("{} - {}", m.name().to_uppercase(), m.description()))
        .collect();

    let choice = Select::new()
        .with_prompt("Select method")
        .items(items.as_slice())
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    Ok(Method::ALL[choice])
}

fn process_image(direction: Direction, key: Key) -> CliResult<()> {
    let (title, input_prompt) = match direction {
        Direction::Encrypt => ("IMAGE ENCRYPTION", "Enter input image path"),
        Direction::Decrypt => ("IMAGE DECRYPTION", "Enter encrypted image path"),
    };
    println!("\n--- {title} ---");

    let image: String = Input::new()
        .with_prompt(input_prompt)
        .interact_text()
        .map_err(prompt_err)?;
    let output: String = Input::new()
        .with_prompt(format!("Enter output path for {direction} image"))
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;
    let output = optional_path(&output);
    let method = ask_for_method()?;
    let options = CipherOptions::new(key, method);

    let image = PathBuf::from(image.trim());
    let written = match direction {
        Direction::Encrypt => {
            println!("\nEncrypting image...");
            pixcrypt_core::commands::encrypt(&image, output.as_deref(), options)?
        }
        Direction::Decrypt => {
            println!("\nDecrypting image...");
            pixcrypt_core::commands::decrypt(&image, output.as_deref(), options)?
        }
    };
    super::print_success(direction, &written, method);

    Ok(())
}

fn prompt_err(e: dialoguer::Error) -> PixcryptError {
    let dialoguer::Error::IO(e) = e;
    PixcryptError::IoError(e)
}

fn optional_path(input: &str) -> Option<PathBuf> {
    let input = input.trim();
    (!input.is_empty()).then(|| PathBuf::from(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn should_fall_back_to_the_default_key() {
        assert_eq!(parse_key_or_default(""), Key::default());
        assert_eq!(parse_key_or_default("   "), Key::default());
        assert_eq!(parse_key_or_default("twelve"), Key::default());
        assert_eq!(parse_key_or_default("12.5"), Key::default());
    }

    #[test]
    fn should_parse_entered_keys() {
        assert_eq!(parse_key_or_default("4711"), Key::new(4711));
        assert_eq!(parse_key_or_default(" -8 "), Key::new(-8));
    }

    #[test]
    fn should_keep_the_io_error_of_an_aborted_prompt() {
        let aborted = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));

        match prompt_err(aborted) {
            PixcryptError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::Interrupted),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_output_means_default_path() {
        assert_eq!(optional_path("  "), None);
        assert_eq!(optional_path(" out.png "), Some(PathBuf::from("out.png")));
    }
}
