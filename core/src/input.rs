/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};

use super::consts::*;
use super::types::Cli;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn load_secret(f: &str) -> Result<String> {
    let s = std::fs::read_to_string(f).with_context(|| format!("Failed to read {}", f))?;
    Ok(s.trim().replace(char::from(25), ""))
}

/// The file option wins over the plain url so secrets never need to sit in the environment.
pub fn database_url(cli: &Cli) -> Result<Option<String>> {
    if let Some(file) = &cli.database_url_file {
        return load_secret(file)
            .context("Failed to read database url from file")
            .map(Some);
    }

    Ok(cli.database_url.clone().filter(|url| !url.trim().is_empty()))
}

pub fn normalize_base_url(s: &str) -> String {
    s.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(""), "");
        assert_eq!(normalize_base_url("/"), "");
        assert_eq!(
            normalize_base_url("https://api.example.org/"),
            "https://api.example.org"
        );
        assert_eq!(normalize_base_url(" http://h:1/v1 "), "http://h:1/v1");
    }
}
