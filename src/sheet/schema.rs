//! Schema Scan Module
//!
//! ヘッダー行を1回だけスキャンして、必須カラムとSourceカラムの位置を
//! 確定するモジュール。行処理中にヘッダーを再スキャンすることはありません。

use calamine::Data;

use crate::error::XlsxToDocxError;

/// 必須カラム: サプライヤ名（グルーピングキー）
pub(crate) const COLUMN_SUPPLIER: &str = "Supplier";

/// 必須カラム: ニュースカテゴリ
pub(crate) const COLUMN_CATEGORY: &str = "Category";

/// 必須カラム: 日付テキスト
pub(crate) const COLUMN_DATE: &str = "Date";

/// 必須カラム: 見出し
pub(crate) const COLUMN_HEADLINE: &str = "Headline";

/// 必須カラム: 要約
pub(crate) const COLUMN_SUMMARY: &str = "Summary";

/// Sourceカラムのデフォルトプレフィックス
pub(crate) const DEFAULT_SOURCE_PREFIX: &str = "Source";

/// ニュースシートのカラム配置
///
/// ヘッダー行のスキャン結果として、各必須カラムの列インデックスと、
/// プレフィックス一致したSourceカラムのインデックス一覧（列順）を
/// 保持します。`S. No`や`Shared`など、関知しないカラムは無視されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SheetSchema {
    /// `Supplier`カラムの列インデックス
    pub supplier_col: usize,

    /// `Category`カラムの列インデックス
    pub category_col: usize,

    /// `Date`カラムの列インデックス
    pub date_col: usize,

    /// `Headline`カラムの列インデックス
    pub headline_col: usize,

    /// `Summary`カラムの列インデックス
    pub summary_col: usize,

    /// Sourceプレフィックスに一致したカラムのインデックス（列順）
    pub source_cols: Vec<usize>,
}

impl SheetSchema {
    /// ヘッダー行をスキャンしてスキーマを構築
    ///
    /// カラム名は完全一致で照合します（並び順は不問）。同名カラムが
    /// 複数ある場合は最初のものを採用します。
    ///
    /// # 引数
    ///
    /// * `header` - ヘッダー行のセル列
    /// * `source_prefix` - Sourceカラムとみなすプレフィックス
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetSchema)` - すべての必須カラムが見つかった場合
    /// * `Err(XlsxToDocxError::MissingColumn)` - 必須カラムが欠けている場合
    pub fn scan(header: &[Data], source_prefix: &str) -> Result<Self, XlsxToDocxError> {
        let mut supplier_col = None;
        let mut category_col = None;
        let mut date_col = None;
        let mut headline_col = None;
        let mut summary_col = None;
        let mut source_cols = Vec::new();

        for (idx, cell) in header.iter().enumerate() {
            let name = match header_name(cell) {
                Some(name) => name,
                None => continue,
            };

            match name {
                COLUMN_SUPPLIER => supplier_col = supplier_col.or(Some(idx)),
                COLUMN_CATEGORY => category_col = category_col.or(Some(idx)),
                COLUMN_DATE => date_col = date_col.or(Some(idx)),
                COLUMN_HEADLINE => headline_col = headline_col.or(Some(idx)),
                COLUMN_SUMMARY => summary_col = summary_col.or(Some(idx)),
                _ => {
                    if name.starts_with(source_prefix) {
                        source_cols.push(idx);
                    }
                }
            }
        }

        Ok(Self {
            supplier_col: required(supplier_col, COLUMN_SUPPLIER)?,
            category_col: required(category_col, COLUMN_CATEGORY)?,
            date_col: required(date_col, COLUMN_DATE)?,
            headline_col: required(headline_col, COLUMN_HEADLINE)?,
            summary_col: required(summary_col, COLUMN_SUMMARY)?,
            source_cols,
        })
    }
}

/// 必須カラムの存在を検証
fn required(col: Option<usize>, name: &str) -> Result<usize, XlsxToDocxError> {
    col.ok_or_else(|| XlsxToDocxError::MissingColumn {
        column: name.to_string(),
    })
}

/// ヘッダーセルからカラム名を取得（文字列セル以外はカラム名として扱わない）
fn header_name(cell: &Data) -> Option<&str> {
    match cell {
        Data::String(s) => Some(s.as_str()),
        _ => None,
    }
}
