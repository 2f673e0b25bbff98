//! Session input model
//!
//! The eight attributes a user describes a network session with. Every field has a
//! default, so a submission is always complete even when fields are left out.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Protocol {
    #[default]
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "UDP")]
    Udp,
    #[serde(rename = "ICMP")]
    Icmp,
}

impl Protocol {
    pub const ALL: [Protocol; 3] = [Protocol::Tcp, Protocol::Udp, Protocol::Icmp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
            Protocol::Icmp => "ICMP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Encryption {
    #[default]
    #[serde(rename = "AES")]
    Aes,
    #[serde(rename = "DES")]
    Des,
    #[serde(rename = "None")]
    None,
}

impl Encryption {
    pub const ALL: [Encryption; 3] = [Encryption::Aes, Encryption::Des, Encryption::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Encryption::Aes => "AES",
            Encryption::Des => "DES",
            Encryption::None => "None",
        }
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-supplied attributes of one network session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SessionInput {
    pub protocol_type: Protocol,
    pub encryption_used: Encryption,
    pub packet_size: u64,
    pub login_attempts: u64,
    #[validate(range(min = 0.0))]
    pub session_duration: f64,
    /// Expected in 0.0 - 1.0, not enforced
    pub ip_reputation: f64,
    pub failed_logins: u64,
    #[serde(deserialize_with = "deserialize_checkbox")]
    pub unusual_access: bool,
}

impl Default for SessionInput {
    fn default() -> Self {
        Self {
            protocol_type: Protocol::Tcp,
            encryption_used: Encryption::Aes,
            packet_size: 500,
            login_attempts: 3,
            session_duration: 500.0,
            ip_reputation: 0.5,
            failed_logins: 1,
            unusual_access: false,
        }
    }
}

impl SessionInput {
    /// Field validation plus finiteness of the real-valued fields
    /// (`NaN` slips through range checks and `inf` parses from form text).
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };

        if !self.session_duration.is_finite() {
            errors.add("session_duration", ValidationError::new("finite"));
        }
        if !self.ip_reputation.is_finite() {
            errors.add("ip_reputation", ValidationError::new("finite"));
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// HTML checkboxes submit `on` (or a custom value) when ticked and nothing otherwise;
/// JSON callers send a plain bool.
fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Checkbox {
        Flag(bool),
        Text(String),
    }

    match Checkbox::deserialize(deserializer)? {
        Checkbox::Flag(b) => Ok(b),
        Checkbox::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "1" | "yes" => Ok(true),
            "" | "off" | "false" | "0" | "no" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid checkbox value '{}'",
                other
            ))),
        },
    }
}
