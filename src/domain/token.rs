//! Token information returned by the explorer's identifier lookup.
//!
//! The `/search` endpoint answers with a loosely shaped object: a `type` tag
//! plus one of `rbt_info`, `ft_info`, `sc_info` or `nft_info`. [`normalize`]
//! turns that into a [`TokenInfo`] so nothing downstream touches raw JSON.

use serde::Serialize;
use serde_json::{Number, Value};

// ============================================================================
// Token Type
// ============================================================================

/// The four token kinds known to the Rubix network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Rubix base token.
    Rbt,
    /// Fungible token.
    Ft,
    /// Smart contract.
    Sc,
    /// Non-fungible token.
    Nft,
}

impl TokenType {
    /// All token types, in payload precedence order.
    pub const ALL: [TokenType; 4] = [Self::Rbt, Self::Ft, Self::Sc, Self::Nft];

    /// Returns the wire tag for this token type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rbt => "RBT",
            Self::Ft => "FT",
            Self::Sc => "SC",
            Self::Nft => "NFT",
        }
    }

    /// Returns the key holding this type's nested payload.
    #[must_use]
    pub const fn payload_key(&self) -> &'static str {
        match self {
            Self::Rbt => "rbt_info",
            Self::Ft => "ft_info",
            Self::Sc => "sc_info",
            Self::Nft => "nft_info",
        }
    }

    /// Prefix used by type-specific field names (`rbt_id`, `ft_name`, ...).
    const fn field_prefix(&self) -> &'static str {
        match self {
            Self::Rbt => "rbt",
            Self::Ft => "ft",
            Self::Sc => "sc",
            Self::Nft => "nft",
        }
    }

    /// Parses a tag case-insensitively. Surrounding whitespace is not ignored.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let upper = tag.to_ascii_uppercase();
        Self::ALL.into_iter().find(|t| t.as_str() == upper)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Normalized Shapes
// ============================================================================

/// Rubix base token details.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RbtInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_did: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_value: Option<Number>,
}

/// Fungible token details.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FtInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_did: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_value: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_did: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_id: Option<String>,
}

/// Smart contract details.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_did: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_id: Option<String>,
}

/// Non-fungible token details.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NftInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_value: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_did: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txn_id: Option<String>,
}

/// Normalized identifier information, tagged by `type` when serialized.
///
/// `Unknown` is an expected outcome, not an error: renderers show a
/// "no detailed information available" state for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TokenInfo {
    #[serde(rename = "RBT")]
    Rbt(RbtInfo),
    #[serde(rename = "FT")]
    Ft(FtInfo),
    #[serde(rename = "SC")]
    Sc(ScInfo),
    #[serde(rename = "NFT")]
    Nft(NftInfo),
    #[serde(rename = "UNKNOWN")]
    Unknown {
        /// The identifier the caller looked up.
        #[serde(rename = "tokenId")]
        token_id: String,
    },
}

impl TokenInfo {
    /// Returns the token type, or `None` for [`TokenInfo::Unknown`].
    #[must_use]
    pub fn token_type(&self) -> Option<TokenType> {
        match self {
            Self::Rbt(_) => Some(TokenType::Rbt),
            Self::Ft(_) => Some(TokenType::Ft),
            Self::Sc(_) => Some(TokenType::Sc),
            Self::Nft(_) => Some(TokenType::Nft),
            Self::Unknown { .. } => None,
        }
    }

    /// Returns the wire tag (`RBT`, `FT`, `SC`, `NFT` or `UNKNOWN`).
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        self.token_type().map_or("UNKNOWN", |t| t.as_str())
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalize a raw lookup response into a [`TokenInfo`].
///
/// The nested payload is the first non-null of `rbt_info`, `ft_info`,
/// `sc_info`, `nft_info`; the `type` tag alone decides the variant. A missing
/// payload or an unrecognized tag yields [`TokenInfo::Unknown`] carrying
/// `requested_id`. Never fails and never mutates `raw`.
#[must_use]
pub fn normalize(raw: &Value, requested_id: &str) -> TokenInfo {
    let unknown = || TokenInfo::Unknown {
        token_id: requested_id.to_string(),
    };

    let Some(payload) = TokenType::ALL
        .iter()
        .find_map(|t| raw.get(t.payload_key()).filter(|v| !v.is_null()))
    else {
        tracing::debug!("No token payload in lookup response for '{requested_id}'");
        return unknown();
    };

    let Some(token_type) = raw
        .get("type")
        .and_then(Value::as_str)
        .and_then(TokenType::from_tag)
    else {
        tracing::debug!("Unrecognized token type {:?} for '{requested_id}'", raw.get("type"));
        return unknown();
    };

    let fields = PayloadFields {
        payload,
        prefix: token_type.field_prefix(),
    };

    match token_type {
        TokenType::Rbt => TokenInfo::Rbt(RbtInfo {
            id: fields.id(),
            owner_did: fields.text("owner_did"),
            block_height: fields.text("block_height"),
            token_value: fields.number("token_value"),
        }),
        TokenType::Ft => TokenInfo::Ft(FtInfo {
            name: fields.name(),
            block_height: fields.text("block_height"),
            creator_did: fields.text("creator_did"),
            token_value: fields.number("token_value"),
            owner_did: fields.text("owner_did"),
            txn_id: fields.text("txn_id"),
        }),
        TokenType::Sc => TokenInfo::Sc(ScInfo {
            name: fields.name(),
            creator_did: fields.text("creator_did"),
            txn_id: fields.text("txn_id"),
        }),
        TokenType::Nft => TokenInfo::Nft(NftInfo {
            id: fields.id(),
            token_value: fields.number("token_value"),
            owner_did: fields.text("owner_did"),
            txn_id: fields.text("txn_id"),
        }),
    }
}

/// Lenient field access over a nested payload object.
struct PayloadFields<'a> {
    payload: &'a Value,
    prefix: &'static str,
}

impl PayloadFields<'_> {
    /// `<prefix>_id`, falling back to `id`.
    fn id(&self) -> Option<String> {
        self.text(&format!("{}_id", self.prefix))
            .or_else(|| self.text("id"))
    }

    /// `<prefix>_name`, falling back to `name`.
    fn name(&self) -> Option<String> {
        self.text(&format!("{}_name", self.prefix))
            .or_else(|| self.text("name"))
    }

    /// Strings as-is, numbers rendered as text, anything else absent.
    fn text(&self, key: &str) -> Option<String> {
        match self.payload.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Numbers as-is, numeric strings parsed, anything else absent.
    fn number(&self, key: &str) -> Option<Number> {
        match self.payload.get(key)? {
            Value::Number(n) => Some(n.clone()),
            Value::String(s) => parse_number(s.trim()),
            _ => None,
        }
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if let Ok(int) = s.parse::<i64>() {
        return Some(Number::from(int));
    }
    s.parse::<f64>().ok().and_then(Number::from_f64)
}

// ============================================================================
// Tests
// ============================================================================
