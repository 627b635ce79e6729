//! 属性分類
//!
//! 正規化済みラベル集合から、カテゴリ・スタイル・柄・素材・性別・用途・季節を判定する。
//! 各判定は互いに独立で、一致がなければ既定値を返す（失敗しない）。

use crate::keywords::KeywordTables;
use crate::types::{Category, Gender, Material, Occasion, Pattern, Season, Style};

/// 性別キーワードの検出状況
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderEvidence {
    /// どちらの語も含まない
    None,
    Male,
    Female,
    /// 両方の語を含む
    Conflicting,
}

pub fn classify_category(labels: &[String], tables: &KeywordTables) -> Category {
    tables.category.first_match(labels).copied().unwrap_or_default()
}

pub fn classify_style(labels: &[String], tables: &KeywordTables) -> Style {
    tables.style.first_match(labels).copied().unwrap_or_default()
}

pub fn classify_pattern(labels: &[String], tables: &KeywordTables) -> Pattern {
    tables.pattern.first_match(labels).copied().unwrap_or_default()
}

pub fn classify_material(labels: &[String], tables: &KeywordTables) -> Material {
    tables.material.first_match(labels).copied().unwrap_or_default()
}

pub fn classify_occasion(labels: &[String], tables: &KeywordTables) -> Occasion {
    tables.occasion.first_match(labels).copied().unwrap_or_default()
}

pub fn classify_season(labels: &[String], tables: &KeywordTables) -> Season {
    tables.season.first_match(labels).copied().unwrap_or_default()
}

/// 性別キーワードの有無を調べる
pub fn gender_evidence(labels: &[String], tables: &KeywordTables) -> GenderEvidence {
    let is_male = tables.gender.value_matches(&Gender::Men, labels);
    let is_female = tables.gender.value_matches(&Gender::Women, labels);

    match (is_male, is_female) {
        (true, false) => GenderEvidence::Male,
        (false, true) => GenderEvidence::Female,
        (true, true) => GenderEvidence::Conflicting,
        (false, false) => GenderEvidence::None,
    }
}

/// 性別を判定する
///
/// 男女の語が両方含まれる場合も、どちらも含まれない場合も `Unisex`。
/// 区別が必要な呼び出し側は [`gender_evidence`] を使う。
pub fn classify_gender(labels: &[String], tables: &KeywordTables) -> Gender {
    match gender_evidence(labels, tables) {
        GenderEvidence::Male => Gender::Men,
        GenderEvidence::Female => Gender::Women,
        GenderEvidence::None | GenderEvidence::Conflicting => Gender::Unisex,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_category_first_match_wins() {
        let tables = KeywordTables::builtin();
        assert_eq!(classify_category(&labels(&["shirt"]), &tables), Category::Top);
        // top と bottom の両方に一致してもテーブル順で top
        assert_eq!(classify_category(&labels(&["shirt", "jean"]), &tables), Category::Top);
        assert_eq!(classify_category(&labels(&["jean, blue jean, denim"]), &tables), Category::Bottom);
        assert_eq!(classify_category(&labels(&["evening gown"]), &tables), Category::Dress);
        assert_eq!(classify_category(&labels(&["sunglasses"]), &tables), Category::Accessory);
    }

    #[test]
    fn test_category_ignores_label_order() {
        let tables = KeywordTables::builtin();
        // ラベルの確信度順ではなく、テーブル順で判定する
        assert_eq!(classify_category(&labels(&["miniskirt", "cardigan"]), &tables), Category::Top);
    }

    #[test]
    fn test_defaults_on_no_match() {
        let tables = KeywordTables::builtin();
        let none = labels(&["lampshade"]);
        assert_eq!(classify_category(&none, &tables), Category::Unknown);
        assert_eq!(classify_style(&none, &tables), Style::Casual);
        assert_eq!(classify_pattern(&none, &tables), Pattern::Solid);
        assert_eq!(classify_material(&none, &tables), Material::Unknown);
        assert_eq!(classify_occasion(&none, &tables), Occasion::Casual);
        assert_eq!(classify_season(&none, &tables), Season::AllSeason);
        assert_eq!(classify_gender(&none, &tables), Gender::Unisex);
    }

    #[test]
    fn test_attribute_classifiers() {
        let tables = KeywordTables::builtin();
        assert_eq!(classify_style(&labels(&["navy blazer"]), &tables), Style::Formal);
        assert_eq!(classify_style(&labels(&["running shoe"]), &tables), Style::Sporty);
        assert_eq!(classify_pattern(&labels(&["plaid shirt"]), &tables), Pattern::Checked);
        assert_eq!(classify_pattern(&labels(&["polka dot blouse"]), &tables), Pattern::Dotted);
        assert_eq!(classify_material(&labels(&["suede boot"]), &tables), Material::Leather);
        assert_eq!(classify_occasion(&labels(&["wedding dress"]), &tables), Occasion::Formal);
        assert_eq!(classify_occasion(&labels(&["gym shorts"]), &tables), Occasion::Sports);
        assert_eq!(classify_season(&labels(&["trench coat"]), &tables), Season::Fall);
        assert_eq!(classify_season(&labels(&["puffer jacket"]), &tables), Season::Winter);
    }

    #[test]
    fn test_classifiers_are_independent() {
        let tables = KeywordTables::builtin();
        let input = labels(&["floral scarf"]);
        assert_eq!(classify_category(&input, &tables), Category::Accessory);
        assert_eq!(classify_pattern(&input, &tables), Pattern::Floral);
    }

    #[test]
    fn test_gender_decision_table() {
        let tables = KeywordTables::builtin();
        assert_eq!(classify_gender(&labels(&["men's jacket"]), &tables), Gender::Men);
        assert_eq!(classify_gender(&labels(&["woman in gown"]), &tables), Gender::Women);
        assert_eq!(classify_gender(&labels(&["female"]), &tables), Gender::Women);
        assert_eq!(classify_gender(&labels(&["boy", "girl"]), &tables), Gender::Unisex);
    }

    #[test]
    fn test_gender_evidence_distinguishes_conflict() {
        let tables = KeywordTables::builtin();
        assert_eq!(gender_evidence(&labels(&["man", "woman"]), &tables), GenderEvidence::Conflicting);
        assert_eq!(gender_evidence(&labels(&["shirt"]), &tables), GenderEvidence::None);
        assert_eq!(gender_evidence(&labels(&["mens shirt"]), &tables), GenderEvidence::Male);
    }

    #[test]
    fn test_gender_plural_forms() {
        let tables = KeywordTables::builtin();
        assert_eq!(classify_gender(&labels(&["boys t-shirt"]), &tables), Gender::Men);
        assert_eq!(classify_gender(&labels(&["males jacket"]), &tables), Gender::Men);
        assert_eq!(classify_gender(&labels(&["menswear jacket"]), &tables), Gender::Men);
        assert_eq!(classify_gender(&labels(&["girls dress"]), &tables), Gender::Women);
        assert_eq!(classify_gender(&labels(&["females blouse"]), &tables), Gender::Women);
        assert_eq!(classify_gender(&labels(&["womenswear"]), &tables), Gender::Women);
        // "women" は "men" を含むが男性扱いしない
        assert_eq!(classify_gender(&labels(&["womens coat"]), &tables), Gender::Women);
    }

    #[test]
    fn test_gender_agrees_with_gender_feature_tag() {
        let tables = KeywordTables::builtin();
        let input = labels(&["boys t-shirt"]);
        let features = crate::features::extract_features(&input, &tables);
        assert!(features.contains(&"Menswear".to_string()));
        assert_eq!(classify_gender(&input, &tables), Gender::Men);
    }
}
