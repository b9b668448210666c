// src/core/sanitize.rs

use crate::error::Error;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// CPF/CNPJ with or without mask → digits only.
/// "123.456.789-01" → "12345678901", "12.345.678/0001-95" → "12345678000195".
pub fn normalize_identifier(raw: &str) -> Result<String, Error> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '/') && !c.is_whitespace())
        .collect();

    if digits.is_empty() {
        return Err(Error::InvalidIdentifier(s!("enter a CPF or CNPJ")));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(Error::InvalidIdentifier(format!(
            "unexpected character {bad:?} in {:?} (digits only, mask allowed)",
            raw.trim()
        )));
    }
    Ok(digits)
}
