//! Search query classification and routing.
//!
//! A free-text query is mapped to exactly one explorer view. An explicit
//! search type wins outright; otherwise [`AUTO_DETECT_RULES`] are tried in
//! order and the first match decides, with the DID view as the final default.

use std::str::FromStr;

use super::history::HistoryStore;
use crate::constants::{
    DID_EXPLORER_PATH, DID_PREFIX, LONG_QUERY_LEN, MAX_QUERY_LEN, MIN_HEX_TX_LEN, TOKEN_EXPLORER_PATH,
    TOKEN_PREFIXES, TRANSACTION_EXPLORER_PATH,
};
use crate::domain::FetchError;

// ============================================================================
// Search Hint
// ============================================================================

/// Search type selected by the user alongside the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchHint {
    /// Let auto-detection decide.
    #[default]
    All,
    Did,
    Token,
    Transaction,
    Block,
}

impl SearchHint {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Did => "did",
            Self::Token => "token",
            Self::Transaction => "transaction",
            Self::Block => "block",
        }
    }

    /// The kind this hint forces, or `None` for [`SearchHint::All`].
    #[must_use]
    pub const fn explicit_kind(&self) -> Option<ResourceKind> {
        match self {
            Self::All => None,
            Self::Did => Some(ResourceKind::Did),
            Self::Token => Some(ResourceKind::Token),
            Self::Transaction => Some(ResourceKind::Transaction),
            Self::Block => Some(ResourceKind::Block),
        }
    }
}

impl FromStr for SearchHint {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "did" => Ok(Self::Did),
            "token" => Ok(Self::Token),
            "transaction" => Ok(Self::Transaction),
            "block" => Ok(Self::Block),
            other => Err(FetchError::invalid_input(format!(
                "Unknown search type '{other}'. Expected all, did, token, transaction or block."
            ))),
        }
    }
}

impl std::fmt::Display for SearchHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Resource Kind
// ============================================================================

/// The explorer view a query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Did,
    Token,
    Transaction,
    /// Block lookups share the transaction view under a `block` parameter.
    Block,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Did => "did",
            Self::Token => "token",
            Self::Transaction => "transaction",
            Self::Block => "block",
        }
    }

    /// Route path of the view rendering this kind.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Did => DID_EXPLORER_PATH,
            Self::Token => TOKEN_EXPLORER_PATH,
            Self::Transaction | Self::Block => TRANSACTION_EXPLORER_PATH,
        }
    }

    /// Query parameter carrying the identifier.
    #[must_use]
    pub const fn param(&self) -> &'static str {
        match self {
            Self::Did => "did",
            Self::Token => "token",
            Self::Transaction => "tx",
            Self::Block => "block",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Search Query
// ============================================================================

/// A validated search: trimmed, non-empty text plus an optional hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    hint: Option<SearchHint>,
}

impl SearchQuery {
    /// Validates and builds a query.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidInput` if `text` is blank after trimming
    /// or longer than [`MAX_QUERY_LEN`] characters.
    pub fn new(text: &str, hint: Option<SearchHint>) -> Result<Self, FetchError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(FetchError::invalid_input("search query is empty"));
        }
        let len = trimmed.chars().count();
        if len > MAX_QUERY_LEN {
            return Err(FetchError::invalid_input(format!(
                "search query is {len} characters long, the limit is {MAX_QUERY_LEN}"
            )));
        }
        Ok(Self {
            text: trimmed.to_string(),
            hint,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn hint(&self) -> Option<SearchHint> {
        self.hint
    }
}

// ============================================================================
// Classified Target
// ============================================================================

/// Where a query should navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTarget {
    pub resource_kind: ResourceKind,
    /// Path plus query string, e.g. `/token-explorer?token=RBT-1`.
    pub route_path: String,
    /// The query text, URL-encoded.
    pub normalized_id: String,
}

impl ClassifiedTarget {
    #[must_use]
    pub fn new(resource_kind: ResourceKind, text: &str) -> Self {
        let normalized_id = urlencoding::encode(text).into_owned();
        let route_path = format!(
            "{}?{}={}",
            resource_kind.path(),
            resource_kind.param(),
            normalized_id
        );
        Self {
            resource_kind,
            route_path,
            normalized_id,
        }
    }
}

// ============================================================================
// Auto-Detection Rules
// ============================================================================

/// One entry of the auto-detection table.
#[derive(Debug, Clone, Copy)]
pub struct DetectionRule {
    /// Short identifier used in logs and tests.
    pub name: &'static str,
    /// Kind produced when the rule matches.
    pub kind: ResourceKind,
    matches: fn(&str) -> bool,
}

impl DetectionRule {
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        (self.matches)(text)
    }
}

/// Auto-detection rules in precedence order; the first match wins.
///
/// The first four recognize concrete identifier shapes, the remaining three
/// are the looser fallback chain. Reordering changes routing of ambiguous
/// input, e.g. short non-`0x` hex strings end up in the DID view.
pub const AUTO_DETECT_RULES: &[DetectionRule] = &[
    DetectionRule {
        name: "did_prefix",
        kind: ResourceKind::Did,
        matches: has_did_prefix,
    },
    DetectionRule {
        name: "token_prefix",
        kind: ResourceKind::Token,
        matches: has_token_prefix,
    },
    DetectionRule {
        name: "hex_tx_hash",
        kind: ResourceKind::Transaction,
        matches: is_hex_tx_hash,
    },
    DetectionRule {
        name: "block_number",
        kind: ResourceKind::Block,
        matches: is_block_number,
    },
    DetectionRule {
        name: "mentions_did",
        kind: ResourceKind::Did,
        matches: mentions_did,
    },
    DetectionRule {
        name: "mentions_token",
        kind: ResourceKind::Token,
        matches: mentions_token,
    },
    DetectionRule {
        name: "mentions_tx",
        kind: ResourceKind::Transaction,
        matches: mentions_tx,
    },
];

/// Kind used when no rule matches.
pub const DEFAULT_KIND: ResourceKind = ResourceKind::Did;

fn has_did_prefix(text: &str) -> bool {
    text.starts_with(DID_PREFIX)
}

/// `^(RBT|FT|NFT|SC)-`, case-sensitive.
fn has_token_prefix(text: &str) -> bool {
    TOKEN_PREFIXES.iter().any(|prefix| {
        text.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-'))
    })
}

fn is_hex_tx_hash(text: &str) -> bool {
    text.starts_with("0x") && text.chars().count() >= MIN_HEX_TX_LEN
}

fn is_block_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn mentions_did(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("did") || lower.contains("rubix")
}

fn mentions_token(text: &str) -> bool {
    text.to_lowercase().contains("token") || has_ticker_prefix(text)
}

fn mentions_tx(text: &str) -> bool {
    text.to_lowercase().contains("tx") || text.chars().count() > LONG_QUERY_LEN
}

/// `^[A-Z]{2,4}-`
fn has_ticker_prefix(text: &str) -> bool {
    let run = text.chars().take_while(|c| c.is_ascii_uppercase()).count();
    (2..=4).contains(&run) && text[run..].starts_with('-')
}

// ============================================================================
// Classification
// ============================================================================

/// Picks the resource kind for `text` using [`AUTO_DETECT_RULES`].
#[must_use]
pub fn detect_resource_kind(text: &str) -> ResourceKind {
    match AUTO_DETECT_RULES.iter().find(|rule| rule.matches(text)) {
        Some(rule) => {
            tracing::debug!("Query '{text}' matched rule {} -> {}", rule.name, rule.kind);
            rule.kind
        }
        None => {
            tracing::debug!("Query '{text}' matched no rule, defaulting to {DEFAULT_KIND}");
            DEFAULT_KIND
        }
    }
}

/// Classifies a query. Total: every query yields exactly one target.
#[must_use]
pub fn classify(query: &SearchQuery) -> ClassifiedTarget {
    let kind = query
        .hint()
        .and_then(|hint| hint.explicit_kind())
        .unwrap_or_else(|| detect_resource_kind(query.text()));
    ClassifiedTarget::new(kind, query.text())
}

// ============================================================================
// Search Router
// ============================================================================

/// Classifies queries and records each one in the search history.
#[derive(Debug)]
pub struct SearchRouter<S> {
    store: S,
}

impl<S: HistoryStore> SearchRouter<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Classifies `query` and appends it to the history.
    ///
    /// A history write failure is logged and does not affect the target.
    pub fn route(&self, query: &SearchQuery) -> ClassifiedTarget {
        let target = classify(query);
        if let Err(e) = self.store.append(query.text()) {
            tracing::warn!("Failed to record search history: {e}");
        }
        target
    }

    /// Validates raw input, then routes it.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidInput` for blank or over-long input; no
    /// history is recorded in that case.
    pub fn route_text(
        &self,
        text: &str,
        hint: Option<SearchHint>,
    ) -> Result<ClassifiedTarget, FetchError> {
        let query = SearchQuery::new(text, hint)?;
        Ok(self.route(&query))
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::history::{FileHistoryStore, MemoryHistoryStore, SearchHistory};
    use color_eyre::Result;
    use rstest::rstest;

    fn auto(text: &str) -> ClassifiedTarget {
        classify(&SearchQuery::new(text, None).unwrap())
    }

    fn hinted(text: &str, hint: SearchHint) -> ClassifiedTarget {
        classify(&SearchQuery::new(text, Some(hint)).unwrap())
    }

    #[rstest]
    #[case::did_prefix("did:rubix:abc123", ResourceKind::Did)]
    #[case::did_prefix_with_token_text("did:rubix:token-tx-RBT-", ResourceKind::Did)]
    #[case::rbt_token("RBT-abc", ResourceKind::Token)]
    #[case::ft_token("FT-gold", ResourceKind::Token)]
    #[case::nft_token("NFT-1", ResourceKind::Token)]
    #[case::sc_token("SC-escrow", ResourceKind::Token)]
    #[case::hex_hash_40("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", ResourceKind::Transaction)]
    #[case::block_number("1234567", ResourceKind::Block)]
    #[case::mentions_rubix("myRubixWallet", ResourceKind::Did)]
    #[case::mentions_token("some token", ResourceKind::Token)]
    #[case::ticker_prefix("ABCD-1", ResourceKind::Token)]
    #[case::mentions_tx("mytx", ResourceKind::Transaction)]
    #[case::long_query("abcdefghijklmnopqrstu", ResourceKind::Transaction)]
    #[case::final_default("hello", ResourceKind::Did)]
    fn test_auto_detection(#[case] text: &str, #[case] expected: ResourceKind) {
        assert_eq!(auto(text).resource_kind, expected);
    }

    #[test]
    fn test_short_hex_falls_through_to_fallback_chain() {
        let short = format!("0x{}", "a".repeat(10));
        assert_eq!(short.len(), 12);
        assert!(!AUTO_DETECT_RULES[2].matches(&short));
        // No fallback rule matches either, so the DID default applies.
        assert_eq!(auto(&short).resource_kind, ResourceKind::Did);
        assert_eq!(auto("0x123").resource_kind, ResourceKind::Did);
    }

    #[test]
    fn test_short_plain_hex_lands_in_did_view() {
        // Observed routing for transaction-like hex without 0x.
        assert_eq!(auto("deadbeef").resource_kind, ResourceKind::Did);
    }

    #[rstest]
    #[case::lowercase_token_prefix("rbt-abc", ResourceKind::Did)]
    #[case::no_hyphen("RBTabc", ResourceKind::Did)]
    #[case::ticker_too_long("ABCDE-1", ResourceKind::Did)]
    #[case::ticker_too_short("A-1", ResourceKind::Did)]
    fn test_prefix_edge_cases(#[case] text: &str, #[case] expected: ResourceKind) {
        assert_eq!(auto(text).resource_kind, expected);
    }

    #[test]
    fn test_block_number_uses_block_param() {
        let target = auto("1234567");
        insta::assert_snapshot!(&target.route_path, @"/transaction-explorer?block=1234567");
        assert_ne!(target.route_path, auto(&format!("0x{}", "1".repeat(40))).route_path);
    }

    #[test]
    fn test_route_paths_are_url_encoded() {
        insta::assert_snapshot!(auto("did:rubix:abc").route_path, @"/did-explorer?did=did%3Arubix%3Aabc");
        insta::assert_snapshot!(auto("RBT-x y").route_path, @"/token-explorer?token=RBT-x%20y");
        assert_eq!(auto("did:rubix:abc").normalized_id, "did%3Arubix%3Aabc");
    }

    #[rstest]
    #[case(SearchHint::Did, ResourceKind::Did, "/did-explorer?did=")]
    #[case(SearchHint::Token, ResourceKind::Token, "/token-explorer?token=")]
    #[case(SearchHint::Transaction, ResourceKind::Transaction, "/transaction-explorer?tx=")]
    #[case(SearchHint::Block, ResourceKind::Block, "/transaction-explorer?block=")]
    fn test_explicit_hint_skips_detection(
        #[case] hint: SearchHint,
        #[case] kind: ResourceKind,
        #[case] prefix: &str,
    ) {
        let target = hinted("did:rubix:x", hint);
        assert_eq!(target.resource_kind, kind);
        assert!(target.route_path.starts_with(prefix));
    }

    #[test]
    fn test_all_hint_behaves_like_no_hint() {
        for text in ["did:rubix:x", "RBT-1", "1234", "hello", "0x123"] {
            assert_eq!(hinted(text, SearchHint::All), auto(text));
        }
    }

    #[test]
    fn test_search_query_validation() {
        assert!(matches!(
            SearchQuery::new("   ", None),
            Err(FetchError::InvalidInput(_))
        ));
        assert!(SearchQuery::new(&"a".repeat(MAX_QUERY_LEN), None).is_ok());
        assert!(SearchQuery::new(&"a".repeat(MAX_QUERY_LEN + 1), None).is_err());
        assert_eq!(SearchQuery::new("  RBT-1 ", None).unwrap().text(), "RBT-1");
    }

    #[rstest]
    #[case("all", SearchHint::All)]
    #[case("DID", SearchHint::Did)]
    #[case("token", SearchHint::Token)]
    #[case("Transaction", SearchHint::Transaction)]
    #[case("block", SearchHint::Block)]
    fn test_search_hint_parsing(#[case] raw: &str, #[case] expected: SearchHint) {
        assert_eq!(raw.parse::<SearchHint>().unwrap(), expected);
        assert_eq!(expected.as_str().parse::<SearchHint>().unwrap(), expected);
    }

    #[test]
    fn test_search_hint_rejects_unknown() {
        assert!("wallet".parse::<SearchHint>().is_err());
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<&str> = AUTO_DETECT_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "did_prefix",
                "token_prefix",
                "hex_tx_hash",
                "block_number",
                "mentions_did",
                "mentions_token",
                "mentions_tx",
            ]
        );
    }

    #[test]
    fn test_router_records_history() {
        let router = SearchRouter::new(MemoryHistoryStore::new());
        let target = router.route_text(" RBT-1 ", None).unwrap();
        router.route_text("hello", Some(SearchHint::Token)).unwrap();
        router.route_text("RBT-1", None).unwrap();

        assert_eq!(target.resource_kind, ResourceKind::Token);
        let history = router.store().load().unwrap();
        assert_eq!(history.entries(), ["RBT-1", "hello"]);
    }

    #[test]
    fn test_router_skips_history_for_invalid_input() {
        let router = SearchRouter::new(MemoryHistoryStore::new());
        assert!(router.route_text("", None).is_err());
        assert!(router.store().load().unwrap().is_empty());
    }

    struct BrokenStore;

    impl HistoryStore for BrokenStore {
        fn load(&self) -> Result<SearchHistory> {
            Err(color_eyre::eyre::eyre!("storage unavailable"))
        }

        fn save(&self, _history: &SearchHistory) -> Result<()> {
            Err(color_eyre::eyre::eyre!("storage unavailable"))
        }
    }

    #[test]
    fn test_router_still_routes_when_store_fails() {
        let router = SearchRouter::new(BrokenStore);
        let target = router.route_text("did:rubix:abc", None).unwrap();
        assert_eq!(target.resource_kind, ResourceKind::Did);
    }

    #[test]
    fn test_router_recovers_from_corrupt_history_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"["a", 1]"#).unwrap();

        let router = SearchRouter::new(FileHistoryStore::new(&path));
        for text in ["RBT-1", "did:rubix:x", "hello"] {
            router.route_text(text, None).unwrap();
        }

        let stored: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(stored, ["hello", "did:rubix:x", "RBT-1"]);
    }
}
