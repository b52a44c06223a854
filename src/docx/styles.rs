//! Style Table Module
//!
//! ドキュメント単位のスタイルテーブルを定義するモジュール。
//! スタイル登録は`ensure`による冪等操作で、同一IDの二重登録は
//! 黙って無視されます（重複スタイルエラーは発生しない）。

/// 名前付き段落スタイルの定義
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParagraphStyle {
    /// スタイルID（`w:styleId`、空白なし）
    pub style_id: String,

    /// 表示名（`w:name`）
    pub name: String,

    /// フォントファミリ
    pub font: String,

    /// フォントサイズ（ハーフポイント単位）
    pub size_half_points: u32,

    /// 太字
    pub bold: bool,

    /// 文字色（16進RGB）
    pub color: String,

    /// 段落前の間隔（twip）
    pub space_before_twips: u32,

    /// 段落後の間隔（twip）
    pub space_after_twips: u32,
}

/// ドキュメント単位のスタイルテーブル
///
/// 1回の生成呼び出しのスコープ内で構築され、`DocumentBuilder`が
/// 所有します。グローバルな共有レジストリは存在しません。
#[derive(Debug, Default)]
pub(crate) struct StyleTable {
    styles: Vec<ParagraphStyle>,
}

impl StyleTable {
    /// 空のスタイルテーブルを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定IDのスタイルが登録済みかどうか
    pub fn contains(&self, style_id: &str) -> bool {
        self.styles.iter().any(|s| s.style_id == style_id)
    }

    /// スタイルを登録（冪等）
    ///
    /// 同一`style_id`が既に登録されている場合は何もしません。
    pub fn ensure(&mut self, style: ParagraphStyle) {
        if !self.contains(&style.style_id) {
            self.styles.push(style);
        }
    }

    /// 登録済みスタイルのイテレータ（登録順）
    pub fn iter(&self) -> impl Iterator<Item = &ParagraphStyle> {
        self.styles.iter()
    }

    /// 登録済みスタイル数
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// スタイルが1つも登録されていないかどうか
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading_style() -> ParagraphStyle {
        ParagraphStyle {
            style_id: "SupplierHeading".to_string(),
            name: "Supplier Heading".to_string(),
            font: "Arial".to_string(),
            size_half_points: 24,
            bold: true,
            color: "1F497D".to_string(),
            space_before_twips: 240,
            space_after_twips: 120,
        }
    }

    #[test]
    fn test_ensure_registers_style() {
        let mut table = StyleTable::new();
        assert!(table.is_empty());

        table.ensure(heading_style());
        assert_eq!(table.len(), 1);
        assert!(table.contains("SupplierHeading"));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut table = StyleTable::new();
        table.ensure(heading_style());
        table.ensure(heading_style());
        table.ensure(heading_style());

        // 二重登録はエラーにならず、黙って無視される
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_contains_unknown_style() {
        let table = StyleTable::new();
        assert!(!table.contains("SupplierHeading"));
    }

    #[test]
    fn test_iter_preserves_registration_order() {
        let mut table = StyleTable::new();
        table.ensure(heading_style());
        let mut second = heading_style();
        second.style_id = "Another".to_string();
        table.ensure(second);

        let ids: Vec<&str> = table.iter().map(|s| s.style_id.as_str()).collect();
        assert_eq!(ids, vec!["SupplierHeading", "Another"]);
    }
}
