use serde::{Deserialize, Serialize};

/// One `contractImports` entry of the project configuration.
///
/// `protocol` and `pack` stay raw strings: unknown values are data, routed
/// to the unsupported writer instead of failing deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub protocol: String,
    pub pack: String,
    #[serde(default)]
    pub omit_npm_pack: bool,
    #[serde(default)]
    pub abi: bool,
}

impl ImportRequest {
    pub fn new(protocol: impl Into<String>, pack: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            pack: pack.into(),
            omit_npm_pack: false,
            abi: false,
        }
    }

    pub fn with_abi(mut self, abi: bool) -> Self {
        self.abi = abi;
        self
    }

    pub fn omit_npm_pack(mut self, omit: bool) -> Self {
        self.omit_npm_pack = omit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_config_field_names() {
        let json = r#"{"protocol":"DYDX","pack":"Flashloan","omitNpmPack":true,"abi":false}"#;
        let request: ImportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.protocol, "DYDX");
        assert_eq!(request.pack, "Flashloan");
        assert!(request.omit_npm_pack);
        assert!(!request.abi);
    }

    #[test]
    fn flags_default_to_false() {
        let request: ImportRequest =
            serde_json::from_str(r#"{"protocol":"KYBER","pack":"IKyberNetworkProxy"}"#).unwrap();
        assert!(!request.abi);
        assert!(!request.omit_npm_pack);
    }
}
