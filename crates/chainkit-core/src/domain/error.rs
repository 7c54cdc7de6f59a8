// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (shared setup futures hand the same error to every waiter)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown network '{value}'")]
    UnknownNetwork { value: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unsupported protocol '{protocol}'")]
    UnsupportedProtocol { protocol: String },

    #[error("Unsupported {protocol} pack '{pack}'")]
    UnsupportedPack {
        protocol: String,
        pack: String,
        supported: Vec<&'static str>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfig(msg) => vec![
                "Check your chainkit.json".into(),
                format!("Details: {}", msg),
                "Run 'chainkit init --force' to regenerate a template".into(),
            ],
            Self::UnknownNetwork { .. } => vec![
                "Supported networks:".into(),
                "  • MAINNET".into(),
                "  • KOVAN".into(),
                "  • ROPSTEN".into(),
                "  • all".into(),
            ],
            Self::UnsupportedProtocol { .. } => vec![
                "Supported protocols: AAVE, BANCOR, DYDX, KYBER, ONEINCH, UNISWAP".into(),
                "Try: chainkit quick <PROTOCOL> to list its packs".into(),
            ],
            Self::UnsupportedPack {
                protocol,
                supported,
                ..
            } => {
                let mut suggestions = vec![format!("Supported {} packs:", protocol)];
                for pack in supported {
                    suggestions.push(format!("  • {}", pack));
                }
                suggestions
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfig(_) | Self::UnknownNetwork { .. } => ErrorCategory::Validation,
            Self::UnsupportedProtocol { .. } | Self::UnsupportedPack { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
