//! Recognized account-name vocabulary.
//!
//! Names are matched exactly as the disclosure provider reports them. Any
//! name outside this vocabulary still resolves, it simply yields zero when no
//! record carries it.

pub const TOTAL_ASSETS: &str = "자산총계";
pub const TOTAL_LIABILITIES: &str = "부채총계";
pub const TOTAL_EQUITY: &str = "자본총계";
pub const CURRENT_ASSETS: &str = "유동자산";
pub const NON_CURRENT_ASSETS: &str = "비유동자산";
pub const CURRENT_LIABILITIES: &str = "유동부채";
pub const REVENUE: &str = "매출액";
pub const OPERATING_INCOME: &str = "영업이익";
pub const NET_INCOME: &str = "당기순이익(손실)";

/// Label of the synthetic residual component in a structure breakdown.
pub const OTHER: &str = "기타";

/// Sub-accounts of current assets, in presentation order.
pub const CURRENT_ASSET_COMPONENTS: [&str; 5] = [
    "현금및현금성자산",
    "단기투자자산",
    "매출채권",
    "재고자산",
    "기타유동자산",
];

/// Sub-accounts of non-current assets, in presentation order.
pub const NON_CURRENT_ASSET_COMPONENTS: [&str; 4] =
    ["유형자산", "무형자산", "장기투자자산", "기타비유동자산"];

/// Headline accounts shown in the key-accounts overview.
pub const KEY_ACCOUNTS: [&str; 8] = [
    TOTAL_ASSETS,
    TOTAL_LIABILITIES,
    TOTAL_EQUITY,
    CURRENT_ASSETS,
    NON_CURRENT_ASSETS,
    REVENUE,
    OPERATING_INCOME,
    NET_INCOME,
];

/// Accounts tracked by the growth analysis, with display labels.
pub const GROWTH_ACCOUNTS: [(&str, &str); 4] = [
    (REVENUE, "매출 증가율"),
    (OPERATING_INCOME, "영업이익 증가율"),
    (NET_INCOME, "순이익 증가율"),
    (TOTAL_ASSETS, "자산 증가율"),
];

/// True if `name` is part of the recognized vocabulary.
pub fn is_recognized(name: &str) -> bool {
    KEY_ACCOUNTS.contains(&name)
        || name == CURRENT_LIABILITIES
        || CURRENT_ASSET_COMPONENTS.contains(&name)
        || NON_CURRENT_ASSET_COMPONENTS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_membership() {
        assert!(is_recognized(TOTAL_ASSETS));
        assert!(is_recognized(CURRENT_LIABILITIES));
        assert!(is_recognized("재고자산"));
        assert!(is_recognized("무형자산"));
        assert!(!is_recognized("Total assets"));
        assert!(!is_recognized(OTHER));
    }
}
