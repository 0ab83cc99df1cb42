//! Demo driver: generate a keypair, encrypt a fixed test message with a
//! fresh coin, decrypt it, and print the original and recovered bytes.

use clap::Parser;
use eyre::Result;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use newhope_pke::params::{MSG_BYTES, SEED_BYTES};
use newhope_pke::{decrypt, encrypt, keygen};

#[derive(Parser)]
#[command(name = "newhope-demo")]
#[command(about = "NewHope-style Ring-LWE PKE demo")]
#[command(version)]
struct Args {
    /// Enable verbose tracing of internal steps
    #[arg(long)]
    verbose: bool,
}

const TEST_MESSAGE: [u8; MSG_BYTES] = [
    225, 235, 49, 214, 170, 104, 167, 11, 44, 191, 245, 93, 225, 169, 110, 109, 210, 245, 50, 76,
    61, 222, 120, 169, 152, 103, 251, 147, 188, 248, 161, 144,
];

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (sk, pk) = keygen(&mut OsRng);

    let mut coin = [0u8; SEED_BYTES];
    OsRng.fill_bytes(&mut coin);
    let ct = encrypt(&pk, &TEST_MESSAGE, &coin);

    let recovered = decrypt(&ct, &sk);

    println!("original:  {:?}", TEST_MESSAGE);
    println!("recovered: {:?}", recovered);
    if recovered == TEST_MESSAGE {
        println!("messages match");
    } else {
        println!("messages differ (decryption failure)");
    }
    Ok(())
}
