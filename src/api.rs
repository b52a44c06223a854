//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// 変換対象のニュースシートを選択する方法を指定します。
/// ニュースレターは1回の生成につき1シートのみを読み込みます。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// 先頭のシートを使用（デフォルト）
    First,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("News".to_string())`
    Name(String),
}

/// 日付セルの出力形式
///
/// Excelの日付型セル（シリアル日付値）をテキストに変換する際の形式を
/// 指定します。文字列として入力された日付はこの設定に関わらず、
/// 入力のまま出力されます（再フォーマットは行いません）。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（YYYY-MM-DD）
    ///
    /// 例: `2025-11-20`
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年（例: 2025）
    /// - `%m`: 2桁の月（01-12）
    /// - `%d`: 2桁の日（01-31）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use newszero::{DateFormat, GeneratorBuilder};
    ///
    /// # fn main() -> Result<(), newszero::XlsxToDocxError> {
    /// let generator = GeneratorBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}
