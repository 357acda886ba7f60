use indexmap::IndexMap;

use crate::model::config::AppConfig;

/// One predefined entry in the built-in task catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable key like `pharmacy-1`
    pub key: String,
    pub name: String,
    pub category: String,
}

impl CatalogEntry {
    fn new(key: &str, name: &str, category: &str) -> Self {
        CatalogEntry {
            key: key.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

/// The built-in catalog, plus any `[[catalog]]` entries from config appended
/// after the built-ins (keyed `custom-N`).
pub fn build_catalog(config: &AppConfig) -> Vec<CatalogEntry> {
    let mut entries = builtin_catalog();
    for (i, extra) in config.catalog.iter().enumerate() {
        entries.push(CatalogEntry {
            key: format!("custom-{}", i + 1),
            name: extra.name.clone(),
            category: extra.category.clone(),
        });
    }
    entries
}

/// Group catalog entries by category, preserving catalog order.
pub fn group_by_category(entries: &[CatalogEntry]) -> IndexMap<String, Vec<&CatalogEntry>> {
    let mut groups: IndexMap<String, Vec<&CatalogEntry>> = IndexMap::new();
    for entry in entries {
        groups.entry(entry.category.clone()).or_default().push(entry);
    }
    groups
}

fn builtin_catalog() -> Vec<CatalogEntry> {
    vec![
        // 調剤業務
        CatalogEntry::new("pharmacy-1", "処方入力", "調剤業務"),
        CatalogEntry::new("pharmacy-2", "入力チェック", "調剤業務"),
        CatalogEntry::new("pharmacy-3", "ピッキング", "調剤業務"),
        CatalogEntry::new("pharmacy-4", "調剤", "調剤業務"),
        CatalogEntry::new("pharmacy-5", "監査", "調剤業務"),
        CatalogEntry::new("pharmacy-6", "セット", "調剤業務"),
        CatalogEntry::new("pharmacy-7", "セット監査", "調剤業務"),
        // 配達・営業
        CatalogEntry::new("delivery-1", "定期薬配達", "配達・営業"),
        CatalogEntry::new("delivery-2", "往診同行", "配達・営業"),
        CatalogEntry::new("delivery-3", "臨時薬対応", "配達・営業"),
        // 事務・管理
        CatalogEntry::new("admin-1", "薬歴", "事務・管理"),
        CatalogEntry::new("admin-2", "報告書", "事務・管理"),
        CatalogEntry::new("admin-3", "レセプト請求　毎月１０日まで", "事務・管理"),
        CatalogEntry::new("admin-4", "原本処方箋確認（有無）", "事務・管理"),
        CatalogEntry::new("admin-5", "請求書・領収書・明細書", "事務・管理"),
        CatalogEntry::new("admin-6", "月末書類準備", "事務・管理"),
        CatalogEntry::new("admin-7", "入居書類準備", "事務・管理"),
        CatalogEntry::new("admin-8", "レジ締め　毎日", "事務・管理"),
        // 業務管理
        CatalogEntry::new("management-1", "発注", "業務管理"),
        CatalogEntry::new("management-2", "残薬確認", "業務管理"),
        CatalogEntry::new("management-3", "新規入居時・契約（対面・郵送）", "業務管理"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::CatalogExtraConfig;

    #[test]
    fn test_builtin_catalog_grouping() {
        let entries = build_catalog(&AppConfig::default());
        let groups = group_by_category(&entries);
        let categories: Vec<&String> = groups.keys().collect();
        assert_eq!(
            categories,
            vec!["調剤業務", "配達・営業", "事務・管理", "業務管理"]
        );
        assert_eq!(groups["調剤業務"].len(), 7);
        assert_eq!(groups["事務・管理"].len(), 8);
    }

    #[test]
    fn test_config_entries_appended() {
        let mut config = AppConfig::default();
        config.catalog.push(CatalogExtraConfig {
            name: "棚卸し".into(),
            category: "業務管理".into(),
        });
        let entries = build_catalog(&config);
        let last = entries.last().unwrap();
        assert_eq!(last.key, "custom-1");
        assert_eq!(last.name, "棚卸し");
        let groups = group_by_category(&entries);
        assert_eq!(groups["業務管理"].len(), 4);
    }
}
