//! Provisioning Helper
//!
//! Computes the base64 reference digest for `CORSO_MASTER_HASH` from the
//! salt and cost parameters in the environment. Reads the master password
//! from stdin so it never lands in shell history. Because the digest goes
//! through the same derivation path the server verifies with, provisioning
//! and verification cannot drift apart.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use auth::MasterSecret;
use platform::crypto::to_base64;
use platform::hashing::{HashParams, derive_digest};

fn env_u32(name: &str, default: u32) -> anyhow::Result<u32> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be an unsigned integer")),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let salt = env::var("CORSO_SALT").context("CORSO_SALT must be set before provisioning")?;

    let defaults = HashParams::default();
    let params = HashParams {
        time_cost: env_u32("CORSO_ARGON2_TIME_COST", defaults.time_cost)?,
        memory_kib: env_u32("CORSO_ARGON2_MEMORY_KIB", defaults.memory_kib)?,
        parallelism: env_u32("CORSO_ARGON2_PARALLELISM", defaults.parallelism)?,
    };

    eprint!("Master password: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read master password from stdin")?;

    let secret = MasterSecret::new(line.trim_end_matches(['\r', '\n']).to_string())?;

    let digest = derive_digest(secret.as_bytes(), salt.as_bytes(), &params)?;

    println!("{}", to_base64(&digest));
    eprintln!(
        "Derived with time_cost={} memory_kib={} parallelism={}; keep these values pinned.",
        params.time_cost, params.memory_kib, params.parallelism
    );

    Ok(())
}
