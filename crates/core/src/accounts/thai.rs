//! Bundled Thai SME chart of accounts (version 2024.1).

use super::chart::{AccountType, ChartAccount, ChartOfAccounts, NormalBalance};

/// Version tag of the bundled table.
pub const THAI_STANDARD_VERSION: &str = "2024.1";

fn accounts() -> Vec<ChartAccount> {
    use AccountType::{Asset, Equity, Expense, Liability, Revenue};

    vec![
        // 1xxxx Assets
        ChartAccount::new("11100", "Cash", "เงินสด", Asset),
        ChartAccount::new("11200", "Bank deposits", "เงินฝากธนาคาร", Asset),
        ChartAccount::new("11300", "Accounts receivable", "ลูกหนี้การค้า", Asset),
        ChartAccount::new("11400", "Input VAT", "ภาษีซื้อ", Asset),
        ChartAccount::new("11410", "Undue input VAT", "ภาษีซื้อยังไม่ถึงกำหนด", Asset),
        ChartAccount::new("11500", "Withholding tax prepaid", "ภาษีเงินได้ถูกหัก ณ ที่จ่าย", Asset),
        ChartAccount::new("11600", "Inventory", "สินค้าคงเหลือ", Asset),
        ChartAccount::new("12100", "Office equipment", "อุปกรณ์สำนักงาน", Asset),
        ChartAccount::new("12900", "Accumulated depreciation", "ค่าเสื่อมราคาสะสม", Asset)
            .with_normal_balance(NormalBalance::Credit),
        // 2xxxx Liabilities
        ChartAccount::new("21100", "Accounts payable", "เจ้าหนี้การค้า", Liability),
        ChartAccount::new("21200", "Output VAT", "ภาษีขาย", Liability),
        ChartAccount::new("21300", "Withholding tax payable", "ภาษีหัก ณ ที่จ่ายค้างจ่าย", Liability),
        ChartAccount::new("21400", "Accrued expenses", "ค่าใช้จ่ายค้างจ่าย", Liability),
        ChartAccount::new("21500", "Social security payable", "เงินประกันสังคมค้างจ่าย", Liability),
        // 3xxxx Equity
        ChartAccount::new("31100", "Registered share capital", "ทุนจดทะเบียน", Equity),
        ChartAccount::new("32100", "Retained earnings", "กำไรสะสม", Equity),
        // 4xxxx Revenue
        ChartAccount::new("41100", "Sales revenue", "รายได้จากการขาย", Revenue),
        ChartAccount::new("41200", "Service revenue", "รายได้จากการให้บริการ", Revenue),
        ChartAccount::new("42100", "Other income", "รายได้อื่น", Revenue),
        // 5xxxx Expenses
        ChartAccount::new("51100", "Cost of goods sold", "ต้นทุนขาย", Expense),
        ChartAccount::new("52100", "Salaries and wages", "เงินเดือนและค่าจ้าง", Expense),
        ChartAccount::new("52200", "Rent expense", "ค่าเช่า", Expense),
        ChartAccount::new("52300", "Utilities", "ค่าสาธารณูปโภค", Expense),
        ChartAccount::new("52400", "Bank charges", "ค่าธรรมเนียมธนาคาร", Expense),
        ChartAccount::new("52500", "Depreciation expense", "ค่าเสื่อมราคา", Expense),
        ChartAccount::new("52800", "Entertainment (legacy)", "ค่ารับรอง (เลิกใช้)", Expense).inactive(),
        ChartAccount::new("52900", "Miscellaneous expenses", "ค่าใช้จ่ายเบ็ดเตล็ด", Expense),
    ]
}

/// Builds the bundled Thai standard chart.
#[must_use]
pub fn thai_standard() -> ChartOfAccounts {
    // The table above is fixed; a failure here is a programming error caught by tests.
    ChartOfAccounts::from_accounts(accounts()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_well_formed() {
        assert!(ChartOfAccounts::from_accounts(accounts()).is_ok());
    }

    #[test]
    fn test_covers_every_account_type() {
        let chart = thai_standard();
        assert!(chart.len() >= 15);
        for t in [
            AccountType::Asset,
            AccountType::Liability,
            AccountType::Equity,
            AccountType::Revenue,
            AccountType::Expense,
        ] {
            assert!(chart.by_type(t).next().is_some(), "missing {t:?}");
        }
    }

    #[test]
    fn test_code_prefix_matches_type() {
        for account in thai_standard().iter() {
            let expected = match account.code.as_bytes()[0] {
                b'1' => AccountType::Asset,
                b'2' => AccountType::Liability,
                b'3' => AccountType::Equity,
                b'4' => AccountType::Revenue,
                _ => AccountType::Expense,
            };
            assert_eq!(account.account_type, expected, "{}", account.code);
        }
    }

    #[test]
    fn test_legacy_entertainment_is_inactive() {
        let chart = thai_standard();
        assert!(!chart.get("52800").unwrap().is_active);
        assert!(chart.get("11200").unwrap().is_active);
    }
}
