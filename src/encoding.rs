use serde::{Deserialize, Serialize};
use std::fmt;

/// Character encodings a corpus file may be declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    Utf8,
    /// UTF-8 with an optional leading byte-order mark
    Utf8Sig,
    Latin1,
    Ascii,
}

impl TextEncoding {
    /// Look up an encoding by its common label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Some(TextEncoding::Utf8),
            "utf-8-sig" | "utf8-sig" => Some(TextEncoding::Utf8Sig),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Some(TextEncoding::Latin1),
            "ascii" | "us-ascii" => Some(TextEncoding::Ascii),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Ascii => "ascii",
        }
    }

    /// Decode a whole document. The error string describes the first offending byte.
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String, String> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| e.utf8_error().to_string()),
            TextEncoding::Utf8Sig => {
                let body = match bytes.strip_prefix(b"\xEF\xBB\xBF") {
                    Some(rest) => rest.to_vec(),
                    None => bytes,
                };
                String::from_utf8(body).map_err(|e| e.utf8_error().to_string())
            }
            // WHY: every byte maps to the code point of the same value
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(pos) => Err(format!("non-ASCII byte 0x{:02X} at offset {pos}", bytes[pos])),
                // Infallible: ASCII is valid UTF-8
                None => String::from_utf8(bytes).map_err(|e| e.utf8_error().to_string()),
            },
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
