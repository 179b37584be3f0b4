//! Default secret detection rules
//!
//! The catalogue is fixed: rules are not configurable at runtime.

use crate::domain::entities::RiskLevel;
use crate::domain::value_objects::PatternRule;

/// Get all default secret detection rules, in matching order
pub fn default_rules() -> Vec<PatternRule> {
    vec![
        aws_access_key_rule(),
        aws_secret_key_rule(),
        github_token_rule(),
        jwt_rule(),
        private_key_rule(),
        database_url_rule(),
        generic_api_key_rule(),
        generic_password_rule(),
    ]
}

/// AWS Access Key rule
pub fn aws_access_key_rule() -> PatternRule {
    PatternRule {
        id: "aws-access-key".to_string(),
        name: "AWS Access Key".to_string(),
        description: "AWS access key ID (AKIA...)".to_string(),
        pattern: r"\bAKIA[0-9A-Z]{16}\b".to_string(),
        risk_level: RiskLevel::High,
    }
}

/// AWS Secret Key rule
///
/// Intentionally loose 40-character base64-ish match. The precision
/// trade-off is known and accepted; tightening it would change which
/// documents get flagged.
pub fn aws_secret_key_rule() -> PatternRule {
    PatternRule {
        id: "aws-secret-key".to_string(),
        name: "AWS Secret Key".to_string(),
        description: "AWS secret access key".to_string(),
        pattern: r"\b[A-Za-z0-9/+=]{40}\b".to_string(),
        risk_level: RiskLevel::High,
    }
}

/// GitHub Token rule
pub fn github_token_rule() -> PatternRule {
    PatternRule {
        id: "github-token".to_string(),
        name: "GitHub Token".to_string(),
        description: "GitHub personal access token (ghp_...)".to_string(),
        pattern: r"\bghp_[A-Za-z0-9]{36}\b".to_string(),
        risk_level: RiskLevel::High,
    }
}

/// JWT rule
pub fn jwt_rule() -> PatternRule {
    PatternRule {
        id: "jwt".to_string(),
        name: "JWT".to_string(),
        description: "JSON Web Token".to_string(),
        pattern: r"\beyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+".to_string(),
        risk_level: RiskLevel::Medium,
    }
}

/// Private key PEM block rule
pub fn private_key_rule() -> PatternRule {
    PatternRule {
        id: "private-key".to_string(),
        name: "Private Key".to_string(),
        description: "PEM private key block".to_string(),
        pattern: r"-----BEGIN (?:RSA |EC |DSA |OPENSSH |ENCRYPTED |PGP )?PRIVATE KEY(?: BLOCK)?-----"
            .to_string(),
        risk_level: RiskLevel::Critical,
    }
}

/// Database URL rule
pub fn database_url_rule() -> PatternRule {
    PatternRule {
        id: "database-url".to_string(),
        name: "Database URL".to_string(),
        description: "Database connection string with embedded credentials".to_string(),
        pattern: r#"\b(?:mongodb|mysql|postgresql|redis)://[^\s"']+"#.to_string(),
        risk_level: RiskLevel::High,
    }
}

/// Generic API Key rule
pub fn generic_api_key_rule() -> PatternRule {
    PatternRule {
        id: "generic-api-key".to_string(),
        name: "API Key".to_string(),
        description: "Generic API key assignment".to_string(),
        pattern: r#"(?i)api[_-]?key["']?\s*[:=]\s*["'][A-Za-z0-9_\-]{20,}["']"#.to_string(),
        risk_level: RiskLevel::Medium,
    }
}

/// Generic Password rule
pub fn generic_password_rule() -> PatternRule {
    PatternRule {
        id: "generic-password".to_string(),
        name: "Password".to_string(),
        description: "Generic password assignment".to_string(),
        pattern: r#"(?i)password["']?\s*[:=]\s*["'][^"']{6,}["']"#.to_string(),
        risk_level: RiskLevel::Medium,
    }
}
