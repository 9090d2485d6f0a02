// src/flash.rs
//! One-shot status messages carried across the post/redirect/get cycle in a cookie.
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

const COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Message,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Message,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == FlashKind::Error
    }

    /// `Set-Cookie` value carrying this flash.
    pub fn to_cookie(&self) -> String {
        let tag = match self.kind {
            FlashKind::Message => 'm',
            FlashKind::Error => 'e',
        };
        let encoded = URL_SAFE_NO_PAD.encode(format!("{tag}:{}", self.text));
        format!("{COOKIE_NAME}={encoded}; Path=/; HttpOnly; SameSite=Lax")
    }

    /// Read the flash out of a `Cookie` request header, if any.
    /// Tampered or undecodable values are ignored.
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        let value = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .map(|(_, value)| value)?;

        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        let decoded = String::from_utf8(bytes).ok()?;

        match decoded.split_once(':')? {
            ("m", text) => Some(Self::message(text)),
            ("e", text) => Some(Self::error(text)),
            _ => None,
        }
    }
}

/// `Set-Cookie` value that expires the flash.
pub fn clear_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; Max-Age=0")
}
