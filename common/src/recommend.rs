//! カテゴリ別の推奨コメント

use crate::keywords::KeywordTables;
use crate::types::Category;

/// カテゴリに対応する推奨コメントを返す
///
/// top / bottom / dress 以外（accessory・unknown）は共通の既定リスト。
pub fn recommendations_for(category: Category, tables: &KeywordTables) -> Vec<String> {
    let lists = &tables.recommendations;
    match category {
        Category::Top => lists.top.clone(),
        Category::Bottom => lists.bottom.clone(),
        Category::Dress => lists.dress.clone(),
        Category::Accessory | Category::Unknown => lists.default.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_list_has_three_items() {
        let tables = KeywordTables::builtin();
        for category in [Category::Top, Category::Bottom, Category::Dress, Category::Unknown] {
            assert_eq!(recommendations_for(category, &tables).len(), 3);
        }
    }

    #[test]
    fn test_accessory_uses_default_list() {
        let tables = KeywordTables::builtin();
        assert_eq!(
            recommendations_for(Category::Accessory, &tables),
            recommendations_for(Category::Unknown, &tables)
        );
        assert_ne!(
            recommendations_for(Category::Dress, &tables),
            recommendations_for(Category::Top, &tables)
        );
    }
}
