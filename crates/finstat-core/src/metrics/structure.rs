//! Asset composition breakdowns.
//!
//! Components keep the declared sub-account order, followed by a synthetic
//! residual (`기타`) covering whatever the listed sub-accounts do not.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::accounts;
use crate::statement::{resolve, LineItem, Period, StatementSection};
use crate::types::{Money, Rate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureComponent {
    pub name: String,
    pub amount: Money,
    pub percentage: Rate,
}

/// Share of `amount` in `total`, in percent. Zero when `total` is not positive
/// or the share is not representable.
pub fn percentage_of(amount: Money, total: Money) -> Rate {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount
        .checked_div(total)
        .and_then(|share| share.checked_mul(dec!(100)))
        .unwrap_or(Decimal::ZERO)
}

/// Break `parent_total` down into the named balance-sheet sub-accounts.
///
/// Sub-accounts resolving to a non-positive current amount are skipped. A
/// residual component is appended when the included amounts fall short of a
/// positive parent total.
pub fn breakdown(
    records: &[LineItem],
    parent_total: Money,
    component_names: &[&str],
) -> Vec<StructureComponent> {
    let mut components: Vec<StructureComponent> = component_names
        .iter()
        .map(|name| {
            (
                *name,
                resolve(
                    records,
                    name,
                    Period::Current,
                    Some(StatementSection::BalanceSheet),
                ),
            )
        })
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(name, amount)| StructureComponent {
            name: name.to_string(),
            amount,
            percentage: percentage_of(amount, parent_total),
        })
        .collect();

    let accounted: Money = components.iter().map(|c| c.amount).sum();
    let residual = parent_total.checked_sub(accounted).unwrap_or(Decimal::ZERO);
    if residual > Decimal::ZERO && parent_total > Decimal::ZERO {
        components.push(StructureComponent {
            name: accounts::OTHER.to_string(),
            amount: residual,
            percentage: percentage_of(residual, parent_total),
        });
    }

    components
}

/// Which list of an [`AssetStructure`] to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureView {
    #[default]
    All,
    Current,
    NonCurrent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetStructure {
    /// Current plus non-current assets.
    pub total_assets: Money,
    pub current_assets: Money,
    pub non_current_assets: Money,
    /// Current vs non-current split of the total.
    pub overview: Vec<StructureComponent>,
    pub current_detail: Vec<StructureComponent>,
    pub non_current_detail: Vec<StructureComponent>,
}

impl AssetStructure {
    pub fn view(&self, view: StructureView) -> &[StructureComponent] {
        match view {
            StructureView::All => &self.overview,
            StructureView::Current => &self.current_detail,
            StructureView::NonCurrent => &self.non_current_detail,
        }
    }
}

pub fn calculate_asset_structure(records: &[LineItem]) -> AssetStructure {
    let bs = Some(StatementSection::BalanceSheet);
    let current_assets = resolve(records, accounts::CURRENT_ASSETS, Period::Current, bs);
    let non_current_assets = resolve(records, accounts::NON_CURRENT_ASSETS, Period::Current, bs);
    let total_assets = current_assets + non_current_assets;

    let overview = if total_assets <= Decimal::ZERO {
        Vec::new()
    } else {
        [
            (accounts::CURRENT_ASSETS, current_assets),
            (accounts::NON_CURRENT_ASSETS, non_current_assets),
        ]
        .into_iter()
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(name, amount)| StructureComponent {
            name: name.to_string(),
            amount,
            percentage: percentage_of(amount, total_assets),
        })
        .collect()
    };

    AssetStructure {
        total_assets,
        current_assets,
        non_current_assets,
        overview,
        current_detail: breakdown(records, current_assets, &accounts::CURRENT_ASSET_COMPONENTS),
        non_current_detail: breakdown(
            records,
            non_current_assets,
            &accounts::NON_CURRENT_ASSET_COMPONENTS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::StatementScope;

    fn bs(name: &str, current: &str) -> LineItem {
        LineItem::new(name, StatementSection::BalanceSheet, StatementScope::Consolidated)
            .with_amounts(current, "")
    }

    #[test]
    fn test_breakdown_with_residual() {
        let records = vec![bs("현금및현금성자산", "400"), bs("매출채권", "300")];
        let parts = breakdown(&records, dec!(1000), &accounts::CURRENT_ASSET_COMPONENTS);
        assert_eq!(
            parts,
            vec![
                StructureComponent {
                    name: "현금및현금성자산".into(),
                    amount: dec!(400),
                    percentage: dec!(40),
                },
                StructureComponent {
                    name: "매출채권".into(),
                    amount: dec!(300),
                    percentage: dec!(30),
                },
                StructureComponent {
                    name: "기타".into(),
                    amount: dec!(300),
                    percentage: dec!(30),
                },
            ]
        );
    }

    #[test]
    fn test_extreme_totals_do_not_overflow() {
        assert_eq!(percentage_of(Decimal::MAX, dec!(1)), Decimal::ZERO);
        assert_eq!(percentage_of(Decimal::MIN, Decimal::MAX), dec!(-100));
        assert_eq!(percentage_of(dec!(1), Decimal::MIN), Decimal::ZERO);

        let records = vec![bs("현금및현금성자산", "400")];
        let parts = breakdown(&records, Decimal::MIN, &accounts::CURRENT_ASSET_COMPONENTS);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].percentage, Decimal::ZERO);

        let parts = breakdown(&records, Decimal::MAX, &accounts::CURRENT_ASSET_COMPONENTS);
        assert_eq!(parts.last().unwrap().name, accounts::OTHER);
        assert_eq!(parts.last().unwrap().amount, Decimal::MAX - dec!(400));
    }

    #[test]
    fn test_breakdown_keeps_declared_order() {
        // Records listed out of order; output follows the component list.
        let records = vec![bs("재고자산", "100"), bs("현금및현금성자산", "200")];
        let parts = breakdown(&records, dec!(300), &accounts::CURRENT_ASSET_COMPONENTS);
        let names: Vec<&str> = parts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["현금및현금성자산", "재고자산"]);
    }

    #[test]
    fn test_breakdown_skips_non_positive() {
        let records = vec![bs("현금및현금성자산", "0"), bs("매출채권", "-50")];
        let parts = breakdown(&records, dec!(500), &accounts::CURRENT_ASSET_COMPONENTS);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, accounts::OTHER);
        assert_eq!(parts[0].amount, dec!(500));
        assert_eq!(parts[0].percentage, dec!(100));
    }

    #[test]
    fn test_breakdown_zero_parent() {
        let records = vec![bs("현금및현금성자산", "400")];
        let parts = breakdown(&records, Decimal::ZERO, &accounts::CURRENT_ASSET_COMPONENTS);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].percentage, Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_conservation() {
        let records = vec![
            bs("현금및현금성자산", "1"),
            bs("단기투자자산", "1"),
            bs("매출채권", "1"),
        ];
        let parts = breakdown(&records, dec!(3), &accounts::CURRENT_ASSET_COMPONENTS);
        let total_pct: Decimal = parts.iter().map(|c| c.percentage).sum();
        let total_amt: Decimal = parts.iter().map(|c| c.amount).sum();
        assert!((total_pct - dec!(100)).abs() < dec!(0.0000001));
        assert_eq!(total_amt, dec!(3));
    }

    #[test]
    fn test_asset_structure_views() {
        let records = vec![
            bs("유동자산", "600"),
            bs("비유동자산", "400"),
            bs("현금및현금성자산", "300"),
            bs("유형자산", "400"),
        ];
        let structure = calculate_asset_structure(&records);
        assert_eq!(structure.total_assets, dec!(1000));
        assert_eq!(structure.overview.len(), 2);
        assert_eq!(structure.overview[0].percentage, dec!(60));
        assert_eq!(structure.view(StructureView::Current).len(), 2);
        // Fully covered by 유형자산, so no residual.
        assert_eq!(structure.view(StructureView::NonCurrent).len(), 1);
        assert_eq!(structure.view(StructureView::NonCurrent)[0].percentage, dec!(100));
    }

    #[test]
    fn test_asset_structure_empty() {
        let structure = calculate_asset_structure(&[]);
        assert!(structure.overview.is_empty());
        assert!(structure.current_detail.is_empty());
        assert!(structure.non_current_detail.is_empty());
    }
}
