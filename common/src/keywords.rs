//! キーワードテーブル
//!
//! 各属性の判定に使う「値 → キーワード列」の順序付きテーブル。
//! 組み込みテーブルのほか、JSONファイルから差し替えられる。
//!
//! ## 照合規則
//! - `Substring`: ラベルがキーワードを部分文字列として含めば一致
//! - `Word`: ラベルの単語列にキーワード（複数語可）が連続して現れれば一致
//!
//! 判定はテーブルの先頭から順に行い、最初に一致した規則の値を採用する。

use crate::error::{Error, Result};
use crate::normalize::{normalize_label, tokenize};
use crate::types::{Category, Gender, Material, Occasion, Pattern, Season, Style};
use serde::{Deserialize, Serialize};

/// キーワード照合方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Substring,
    Word,
}

/// 1つの値と、それを選ぶキーワード列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule<T> {
    pub value: T,
    pub keywords: Vec<String>,
}

impl<T> KeywordRule<T> {
    pub fn new(value: T, keywords: &[&str]) -> Self {
        Self {
            value,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// いずれかのラベルがいずれかのキーワードに一致するか
    pub fn matches(&self, labels: &[String], mode: MatchMode) -> bool {
        self.keywords
            .iter()
            .any(|kw| labels.iter().any(|label| keyword_matches(label, kw, mode)))
    }
}

/// 順序付きキーワードテーブル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable<T> {
    #[serde(default)]
    pub mode: MatchMode,
    pub rules: Vec<KeywordRule<T>>,
}

impl<T> KeywordTable<T> {
    pub fn new(mode: MatchMode, rules: Vec<KeywordRule<T>>) -> Self {
        Self { mode, rules }
    }

    /// 最初に一致した規則の値
    pub fn first_match(&self, labels: &[String]) -> Option<&T> {
        self.rules
            .iter()
            .find(|rule| rule.matches(labels, self.mode))
            .map(|rule| &rule.value)
    }

    /// 一致した全規則の値（テーブル順）
    pub fn all_matches<'a>(&'a self, labels: &'a [String]) -> impl Iterator<Item = &'a T> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.matches(labels, self.mode))
            .map(|rule| &rule.value)
    }

    /// 指定した値の規則が一致するか
    pub fn value_matches(&self, value: &T, labels: &[String]) -> bool
    where
        T: PartialEq,
    {
        self.rules
            .iter()
            .filter(|rule| &rule.value == value)
            .any(|rule| rule.matches(labels, self.mode))
    }

    fn normalize_keywords(&mut self) {
        for rule in &mut self.rules {
            for kw in &mut rule.keywords {
                *kw = normalize_label(kw);
            }
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| kw.is_empty()) {
                return Err(Error::Config(format!("{}: empty keyword", name)));
            }
        }
        Ok(())
    }
}

/// 単一ラベルとキーワードの照合
pub fn keyword_matches(label: &str, keyword: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Substring => label.contains(keyword),
        MatchMode::Word => {
            let label_tokens = tokenize(label);
            let keyword_tokens = tokenize(keyword);
            if keyword_tokens.is_empty() || keyword_tokens.len() > label_tokens.len() {
                return false;
            }
            label_tokens
                .windows(keyword_tokens.len())
                .any(|window| window == keyword_tokens.as_slice())
        }
    }
}

/// 特徴タグが空のときの代替タグ判定に使うキーワード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackKeywords {
    pub top: Vec<String>,
    pub bottom: Vec<String>,
}

/// カテゴリ別の推奨コメント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationLists {
    pub top: Vec<String>,
    pub bottom: Vec<String>,
    pub dress: Vec<String>,
    /// top/bottom/dress 以外のカテゴリ
    pub default: Vec<String>,
}

impl RecommendationLists {
    /// 各リストの件数（固定）
    pub const LEN: usize = 3;

    fn validate(&self) -> Result<()> {
        let lists = [
            ("top", &self.top),
            ("bottom", &self.bottom),
            ("dress", &self.dress),
            ("default", &self.default),
        ];
        for (name, list) in lists {
            if list.len() != Self::LEN {
                return Err(Error::Config(format!(
                    "recommendations.{}: expected {} entries, found {}",
                    name,
                    Self::LEN,
                    list.len()
                )));
            }
        }
        Ok(())
    }
}

/// 全属性のキーワードテーブル
///
/// JSONで一部のセクションだけ指定した場合、残りは組み込み値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordTables {
    pub category: KeywordTable<Category>,
    pub style: KeywordTable<Style>,
    pub pattern: KeywordTable<Pattern>,
    pub material: KeywordTable<Material>,
    pub occasion: KeywordTable<Occasion>,
    pub season: KeywordTable<Season>,
    /// 性別判定（Men / Women の2規則）
    pub gender: KeywordTable<Gender>,
    /// 衣類種別・素材・スタイルの特徴タグ
    pub feature_groups: KeywordTable<String>,
    /// ポケット・襟・袖などの細部タグ
    pub detail_features: KeywordTable<String>,
    /// Menswear / Womenswear タグ（性別判定より広い語彙）
    pub gender_features: KeywordTable<String>,
    pub fallback: FallbackKeywords,
    pub recommendations: RecommendationLists,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordTables {
    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み（キーワードは正規化してから検証する）
    pub fn from_json(json: &str) -> Result<Self> {
        let mut tables: Self = serde_json::from_str(json)?;
        tables.normalize_keywords();
        tables.validate()?;
        Ok(tables)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn normalize_keywords(&mut self) {
        self.category.normalize_keywords();
        self.style.normalize_keywords();
        self.pattern.normalize_keywords();
        self.material.normalize_keywords();
        self.occasion.normalize_keywords();
        self.season.normalize_keywords();
        self.gender.normalize_keywords();
        self.feature_groups.normalize_keywords();
        self.detail_features.normalize_keywords();
        self.gender_features.normalize_keywords();
        for kw in self.fallback.top.iter_mut().chain(self.fallback.bottom.iter_mut()) {
            *kw = normalize_label(kw);
        }
    }

    /// 空キーワード（全ラベルに一致してしまう）と、3件でない推奨リストを拒否する
    pub fn validate(&self) -> Result<()> {
        self.category.validate("category")?;
        self.style.validate("style")?;
        self.pattern.validate("pattern")?;
        self.material.validate("material")?;
        self.occasion.validate("occasion")?;
        self.season.validate("season")?;
        self.gender.validate("gender")?;
        self.feature_groups.validate("featureGroups")?;
        self.detail_features.validate("detailFeatures")?;
        self.gender_features.validate("genderFeatures")?;
        if self.fallback.top.iter().chain(&self.fallback.bottom).any(|kw| kw.is_empty()) {
            return Err(Error::Config("fallback: empty keyword".into()));
        }
        self.recommendations.validate()
    }

    /// 組み込みテーブル
    pub fn builtin() -> Self {
        Self {
            category: Self::category_table(),
            style: Self::style_table(),
            pattern: Self::pattern_table(),
            material: Self::material_table(),
            occasion: Self::occasion_table(),
            season: Self::season_table(),
            gender: Self::gender_table(),
            feature_groups: Self::feature_group_table(),
            detail_features: Self::detail_feature_table(),
            gender_features: Self::gender_feature_table(),
            fallback: FallbackKeywords {
                top: strings(&["shirt", "top"]),
                bottom: strings(&["pant", "jean", "trouser"]),
            },
            recommendations: Self::recommendation_lists(),
        }
    }

    fn category_table() -> KeywordTable<Category> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                KeywordRule::new(Category::Top, &[
                    "shirt", "t-shirt", "tshirt", "top", "blouse", "sweater", "jacket",
                    "hoodie", "sweatshirt", "cardigan", "jersey", "polo", "tank", "coat",
                    "tee", "tunic", "vest",
                ]),
                KeywordRule::new(Category::Bottom, &[
                    "pants", "jean", "trousers", "shorts", "skirt", "leggings", "chinos",
                    "slacks", "trunks", "joggers",
                ]),
                KeywordRule::new(Category::Dress, &[
                    "dress", "gown", "frock", "robe", "abaya", "kimono",
                ]),
                KeywordRule::new(Category::Accessory, &[
                    "hat", "cap", "bag", "belt", "scarf", "watch", "sunglasses", "shoe",
                    "sneaker", "boot", "glove", "necklace", "jewelry", "wallet", "tie",
                ]),
            ],
        )
    }

    fn style_table() -> KeywordTable<Style> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                KeywordRule::new(Style::Formal, &[
                    "formal", "blazer", "tuxedo", "dress shirt", "business", "bow tie",
                    "windsor tie", "suit of clothes", "evening",
                ]),
                KeywordRule::new(Style::Sporty, &[
                    "sport", "athletic", "running", "gym", "track", "yoga", "training",
                    "sneaker", "jogger",
                ]),
            ],
        )
    }

    fn pattern_table() -> KeywordTable<Pattern> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                KeywordRule::new(Pattern::Striped, &["stripe"]),
                KeywordRule::new(Pattern::Floral, &["floral", "flower"]),
                KeywordRule::new(Pattern::Checked, &["check", "plaid", "tartan", "gingham"]),
                KeywordRule::new(Pattern::Dotted, &["polka", "dot"]),
            ],
        )
    }

    fn material_table() -> KeywordTable<Material> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                KeywordRule::new(Material::Denim, &["denim", "jean"]),
                KeywordRule::new(Material::Cotton, &["cotton"]),
                KeywordRule::new(Material::Wool, &["wool", "knit", "cashmere", "fleece"]),
                KeywordRule::new(Material::Silk, &["silk", "satin"]),
                KeywordRule::new(Material::Leather, &["leather", "suede"]),
            ],
        )
    }

    fn occasion_table() -> KeywordTable<Occasion> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                KeywordRule::new(Occasion::Formal, &[
                    "formal", "wedding", "party", "business", "office", "evening", "tuxedo",
                ]),
                KeywordRule::new(Occasion::Sports, &[
                    "sport", "gym", "running", "athletic", "workout", "training",
                ]),
            ],
        )
    }

    fn season_table() -> KeywordTable<Season> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                KeywordRule::new(Season::Summer, &[
                    "summer", "beach", "swim", "bikini", "sandal", "sundress",
                ]),
                KeywordRule::new(Season::Winter, &[
                    "winter", "parka", "puffer", "fur coat", "thermal", "snow", "mitten",
                    "wool",
                ]),
                KeywordRule::new(Season::Spring, &[
                    "spring", "raincoat", "windbreaker", "light jacket",
                ]),
                KeywordRule::new(Season::Fall, &[
                    "fall", "autumn", "trench", "flannel", "corduroy",
                ]),
            ],
        )
    }

    fn gender_table() -> KeywordTable<Gender> {
        KeywordTable::new(
            MatchMode::Word,
            vec![
                // 単語一致のため複数形・合成語も列挙する
                KeywordRule::new(Gender::Men, &[
                    "men", "man", "male", "males", "boy", "boys", "mens", "menswear",
                ]),
                KeywordRule::new(Gender::Women, &[
                    "women", "woman", "female", "females", "girl", "girls", "womens",
                    "womenswear",
                ]),
            ],
        )
    }

    fn feature_group_table() -> KeywordTable<String> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                tag("T-Shirt Style", &["t-shirt", "tshirt", "tee shirt"]),
                tag("Button-Up Shirt", &["dress shirt", "button-down", "button down", "oxford shirt"]),
                tag("Denim Material", &["denim", "jean"]),
                tag("Outerwear", &["jacket", "coat", "blazer", "parka"]),
                tag("Knitwear", &["sweater", "knit", "cardigan", "pullover"]),
                tag("Sweatshirt", &["sweatshirt", "hoodie"]),
                tag("Dress", &["dress", "gown"]),
                tag("Skirt", &["skirt"]),
                tag("Trousers", &["pants", "trousers", "chinos", "slacks"]),
                tag("Shorts", &["shorts", "trunks"]),
                tag("Cotton Material", &["cotton"]),
                tag("Leather Material", &["leather", "suede"]),
                tag("Wool Material", &["wool", "cashmere"]),
                tag("Silk Material", &["silk", "satin"]),
                tag("Formal Style", &["formal", "tuxedo", "blazer", "suit of clothes"]),
                tag("Athletic Style", &["sport", "athletic", "gym", "running"]),
                tag("Casual Style", &["casual"]),
                tag("Vintage Style", &["vintage", "retro"]),
            ],
        )
    }

    fn detail_feature_table() -> KeywordTable<String> {
        KeywordTable::new(
            MatchMode::Substring,
            vec![
                tag("Pockets", &["pocket"]),
                tag("Buttons", &["button"]),
                tag("Zipper", &["zip"]),
                tag("Collar", &["collar"]),
                tag("V-Neck", &["v-neck", "v neck", "vneck"]),
                tag("Crew Neck", &["crew neck", "crewneck", "round neck"]),
                tag("Turtleneck", &["turtleneck", "turtle neck", "polo neck"]),
                tag("Long Sleeves", &["long sleeve", "long-sleeve"]),
                tag("Short Sleeves", &["short sleeve", "short-sleeve"]),
                tag("Sleeveless", &["sleeveless", "tank"]),
                tag("Hood", &["hood"]),
            ],
        )
    }

    fn gender_feature_table() -> KeywordTable<String> {
        KeywordTable::new(
            MatchMode::Word,
            vec![
                tag("Menswear", &[
                    "men", "man", "male", "males", "boy", "boys", "mens", "gentleman", "gentlemen",
                    "masculine", "menswear",
                ]),
                tag("Womenswear", &[
                    "women", "woman", "female", "females", "girl", "girls", "womens", "lady", "ladies",
                    "feminine", "womenswear",
                ]),
            ],
        )
    }

    fn recommendation_lists() -> RecommendationLists {
        RecommendationLists {
            top: strings(&[
                "Pair with high-waisted jeans for a relaxed everyday look",
                "Layer under a blazer to dress it up for the office",
                "Tuck into a midi skirt for a balanced silhouette",
            ]),
            bottom: strings(&[
                "Match with a fitted top to balance proportions",
                "Add a tucked-in shirt and a belt for a polished outfit",
                "Wear with sneakers for casual days or loafers for smart-casual",
            ]),
            dress: strings(&[
                "Add a belt to define the waist",
                "Layer with a denim jacket for cooler evenings",
                "Finish with strappy sandals or block heels",
            ]),
            default: strings(&[
                "Build an outfit around this piece with neutral basics",
                "Mix textures to add depth to the look",
                "Choose accessories that echo its dominant colors",
            ]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn tag(name: &str, keywords: &[&str]) -> KeywordRule<String> {
    KeywordRule::new(name.to_string(), keywords)
}
