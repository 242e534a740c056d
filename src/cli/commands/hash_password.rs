//! Hash password command handler

use crate::auth::password;

pub fn cmd_hash_password(plaintext: &str) -> anyhow::Result<()> {
    if plaintext.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    println!("{}", password::hash(plaintext)?);
    Ok(())
}
