//! RS256 key pair bootstrap tool.
//!
//! Generates the RSA key pair used to sign and verify access tokens, writes
//! it as PEM files, then checks the written files by issuing and verifying a
//! throwaway token.
//!
//! Usage:
//! ```bash
//! # Default: 2048-bit pair in keys/
//! cargo run --bin tm_keygen
//!
//! # Stronger key in a custom directory
//! cargo run --bin tm_keygen -- --bits 4096 --keys-dir /etc/task-management/keys
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tm_core::{
    generate_key_pair, persist_key_pair, AuthConfig, ClaimSet, FileKeyRepository, KeyPathConfig,
    KeyRepository, TokenService, TokenServiceConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "tm_keygen",
    about = "Generate the RS256 signing key pair",
    long_about = "Generate an RSA key pair for RS256 access tokens and write it as PKCS#8 / SubjectPublicKeyInfo PEM files"
)]
struct KeygenArgs {
    /// RSA modulus size in bits (minimum 2048)
    #[arg(long, default_value_t = 2048)]
    bits: usize,

    /// Directory receiving private_key.pem and public_key.pem; overrides the individual paths
    #[arg(long)]
    keys_dir: Option<PathBuf>,

    /// Destination of the private key [default: JWT_PRIVATE_KEY_PATH or keys/private_key.pem]
    #[arg(long)]
    private_key: Option<PathBuf>,

    /// Destination of the public key [default: JWT_PUBLIC_KEY_PATH or keys/public_key.pem]
    #[arg(long)]
    public_key: Option<PathBuf>,
}

impl KeygenArgs {
    /// Resolves output paths, falling back to the configured ones
    fn key_paths(&self, configured: &KeyPathConfig) -> KeyPathConfig {
        if let Some(dir) = &self.keys_dir {
            return KeyPathConfig::in_dir(dir);
        }
        KeyPathConfig::new(
            self.private_key
                .clone()
                .unwrap_or_else(|| configured.private_key_path.clone()),
            self.public_key
                .clone()
                .unwrap_or_else(|| configured.public_key_path.clone()),
        )
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = KeygenArgs::parse();
    let config = AuthConfig::from_env().context("Invalid JWT configuration")?;
    let paths = args.key_paths(&config.keys);

    run(args.bits, &paths, &config.token)?;
    print_reminders(args.bits, &paths);

    Ok(())
}

/// Generates, persists and self-tests a key pair at `paths`
fn run(bits: usize, paths: &KeyPathConfig, token_config: &TokenServiceConfig) -> Result<()> {
    info!(bits = bits, "Generating RSA key pair, this may take a moment");

    let pair = generate_key_pair(bits).context("Key generation failed")?;
    persist_key_pair(&pair, &paths.private_key_path, &paths.public_key_path)
        .context("Failed to write key files")?;

    self_test(paths, token_config).context("Written keys failed the self-test")?;
    Ok(())
}

/// Loads the written files back and round-trips a token through them
fn self_test(paths: &KeyPathConfig, token_config: &TokenServiceConfig) -> Result<()> {
    let repository = FileKeyRepository::from_config(paths);
    let private_key = repository.load_private_key()?;
    let public_key = repository.load_public_key()?;
    if private_key.public_key() != public_key {
        anyhow::bail!("Public key file does not match the private key");
    }

    let service = TokenService::new(repository, token_config.clone())?;
    let claims = ClaimSet::new().with("sub", "keygen-self-test");
    let token = service.issue(&claims, None)?;

    let preview = service.decode_unverified(&token)?;
    info!(
        event = "key_self_test_token",
        expires_at = ?preview.expires_at(),
        "Issued self-test token"
    );

    let verified = service.verify(&token)?;
    if verified.subject() != Some("keygen-self-test") {
        anyhow::bail!("Self-test token came back with unexpected claims");
    }

    info!(event = "key_self_test_passed", "Issued and verified a test token with the new keys");
    Ok(())
}

fn print_reminders(bits: usize, paths: &KeyPathConfig) {
    info!(
        algorithm = %format!("RSA-{bits}"),
        hash = "SHA-256",
        private_key = %paths.private_key_path.display(),
        public_key = %paths.public_key_path.display(),
        "RSA key pair generated successfully"
    );
    warn!("Keep the private key secret: never commit it to version control and back it up securely");
    info!("The public key is safe to share with services that verify tokens");
    info!("Add the key directory to .gitignore and point JWT_PRIVATE_KEY_PATH / JWT_PUBLIC_KEY_PATH at the files");
}
