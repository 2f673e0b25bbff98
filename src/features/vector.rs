//! Feature Vector - encoded session as sent to the model
//!
//! Integer-valued features serialize as JSON integers and the two real-valued
//! ones as JSON reals, matching what the form produced when the model was built.

use serde::Serialize;

use super::layout::{feature_index, layout_hash, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
use crate::models::{Encryption, Protocol, SessionInput};

/// One position of the vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Int(u64),
    Real(f64),
}

impl FeatureValue {
    fn flag(set: bool) -> Self {
        FeatureValue::Int(u64::from(set))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            FeatureValue::Int(i) => i as f64,
            FeatureValue::Real(r) => r,
        }
    }
}

/// Ordered, immutable feature vector in FEATURE_LAYOUT order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureVector {
    /// Encode a complete session input. Pure, cannot fail.
    pub fn encode(input: &SessionInput) -> Self {
        Self {
            values: [
                FeatureValue::Int(input.packet_size),
                FeatureValue::Int(input.login_attempts),
                FeatureValue::Real(input.session_duration),
                FeatureValue::Real(input.ip_reputation),
                FeatureValue::Int(input.failed_logins),
                FeatureValue::flag(input.unusual_access),
                FeatureValue::flag(input.protocol_type == Protocol::Tcp),
                FeatureValue::flag(input.protocol_type == Protocol::Udp),
                FeatureValue::flag(input.encryption_used == Encryption::Des),
                FeatureValue::flag(input.encryption_used == Encryption::None),
            ],
        }
    }

    pub fn values(&self) -> &[FeatureValue; FEATURE_COUNT] {
        &self.values
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|i| self.values[i].as_f64())
    }

    /// JSON form for debug logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": FEATURE_VERSION,
            "layout_hash": format!("{:08x}", layout_hash()),
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values().iter())
                .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
                .collect::<serde_json::Map<_, _>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(protocol: Protocol, encryption: Encryption) -> SessionInput {
        SessionInput {
            protocol_type: protocol,
            encryption_used: encryption,
            ..SessionInput::default()
        }
    }

    #[test]
    fn test_default_session_encoding() {
        let vector = FeatureVector::encode(&SessionInput::default());
        assert_eq!(
            vector.values().map(|v| v.as_f64()),
            [500.0, 3.0, 500.0, 0.5, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_wire_format() {
        let vector = FeatureVector::encode(&SessionInput::default());
        let json = serde_json::to_string(&vector).unwrap();
        assert_eq!(json, "[500,3,500.0,0.5,1,0,1,0,0,0]");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        for protocol in Protocol::ALL {
            for encryption in Encryption::ALL {
                for unusual_access in [false, true] {
                    let session = SessionInput {
                        unusual_access,
                        ..input(protocol, encryption)
                    };
                    assert_eq!(FeatureVector::encode(&session), FeatureVector::encode(&session));
                }
            }
        }
    }

    #[test]
    fn test_protocol_one_hot_exclusivity() {
        for protocol in Protocol::ALL {
            let v = FeatureVector::encode(&input(protocol, Encryption::Aes));
            let tcp = v.get_by_name("protocol_is_tcp").unwrap();
            let udp = v.get_by_name("protocol_is_udp").unwrap();

            assert!(tcp + udp <= 1.0);
            assert_eq!(tcp + udp == 0.0, protocol == Protocol::Icmp);
            assert_eq!(tcp == 1.0, protocol == Protocol::Tcp);
            assert_eq!(udp == 1.0, protocol == Protocol::Udp);
        }
    }

    #[test]
    fn test_encryption_one_hot_exclusivity() {
        for encryption in Encryption::ALL {
            let v = FeatureVector::encode(&input(Protocol::Tcp, encryption));
            let des = v.get_by_name("encryption_is_des").unwrap();
            let none = v.get_by_name("encryption_is_none").unwrap();

            assert!(des + none <= 1.0);
            assert_eq!(des + none == 0.0, encryption == Encryption::Aes);
            assert_eq!(des == 1.0, encryption == Encryption::Des);
            assert_eq!(none == 1.0, encryption == Encryption::None);
        }
    }

    #[test]
    fn test_unusual_access_coercion() {
        let off = FeatureVector::encode(&SessionInput::default());
        assert_eq!(off.values()[5], FeatureValue::Int(0));

        let on = FeatureVector::encode(&SessionInput {
            unusual_access: true,
            ..SessionInput::default()
        });
        assert_eq!(on.values()[5], FeatureValue::Int(1));
    }

    #[test]
    fn test_udp_des_encoding() {
        let session = SessionInput {
            protocol_type: Protocol::Udp,
            encryption_used: Encryption::Des,
            packet_size: 1200,
            login_attempts: 7,
            session_duration: 12.25,
            ip_reputation: 0.9,
            failed_logins: 4,
            unusual_access: true,
        };
        let json = serde_json::to_string(&FeatureVector::encode(&session)).unwrap();
        assert_eq!(json, "[1200,7,12.25,0.9,4,1,0,1,1,0]");
    }

    #[test]
    fn test_log_entry_names_values() {
        let entry = FeatureVector::encode(&SessionInput::default()).to_log_entry();
        assert_eq!(entry["feature_version"], 1);
        assert_eq!(entry["named_values"]["login_attempts"], 3);
        assert_eq!(entry["named_values"]["ip_reputation"], 0.5);
    }
}
