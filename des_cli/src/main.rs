use clap::Parser;
use des_crypto::crypto::des_tables::validate_tables;
use des_crypto::{CipherError, Des};

/// Encrypt or decrypt a single 64-bit DES block.
#[derive(Parser)]
#[command(name = "des_cli")]
struct Args {
    /// 16 hex digits of input block (ciphertext with --decrypt)
    #[arg(long)]
    plaintext: String,

    /// 16 hex digits of key
    #[arg(long)]
    key: String,

    /// Run the inverse transform
    #[arg(long)]
    decrypt: bool,
}

fn run(args: &Args) -> Result<String, CipherError> {
    validate_tables()?;
    let cipher = Des::from_hex_key(&args.key)?;
    if args.decrypt {
        cipher.decrypt_hex(&args.plaintext)
    } else {
        cipher.encrypt_hex(&args.plaintext)
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
