//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// newszeroクレート全体で使用するエラー型
///
/// Excelファイルの読み込み、スキーマ検証、DOCX生成処理中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Parse`: Excelファイルの解析中に発生したエラー（calamine由来）
/// - `MissingColumn`: 必須カラムがヘッダー行に存在しないエラー
/// - `Config`: 設定の検証に失敗したエラー（無効なシート指定など）
/// - `Xml`: DOCX内部XMLの書き出しエラー（quick-xml由来）
/// - `Zip`: DOCXパッケージ（ZIPアーカイブ）の書き出しエラー
/// - `SecurityViolation`: 入力サイズ制限に違反したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use newszero::XlsxToDocxError;
/// use std::fs::File;
///
/// fn open_sheet(path: &str) -> Result<(), XlsxToDocxError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToDocxError {
    /// I/O操作中に発生したエラー
    ///
    /// ファイルの読み込み失敗、書き込み失敗など、標準ライブラリの
    /// `std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー
    ///
    /// calamineクレートがExcelファイルを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// 必須カラムがヘッダー行に存在しないエラー
    ///
    /// ニュースシートには `Supplier` / `Category` / `Date` / `Headline` /
    /// `Summary` カラムが必須です。カラム名は完全一致で照合されます
    /// （カラムの並び順は問いません）。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use newszero::XlsxToDocxError;
    ///
    /// let error = XlsxToDocxError::MissingColumn {
    ///     column: "Supplier".to_string(),
    /// };
    ///
    /// println!("{}", error);
    /// // 出力: "Required column 'Supplier' not found in header row"
    /// ```
    #[error("Required column '{column}' not found in header row")]
    MissingColumn {
        /// 見つからなかったカラム名
        column: String,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `GeneratorBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。また、存在しないシート名や範囲外のシート
    /// インデックスを指定した場合にも使用されます。
    #[error("Configuration error: {0}")]
    Config(String),

    /// DOCX内部XMLの書き出し中に発生したエラー
    ///
    /// quick-xmlのイベントライターがWordprocessingMLパートを書き出す際に
    /// 発生したエラーです。
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// DOCXパッケージ（ZIPアーカイブ）の書き出しエラー
    #[error("ZIP archive error: {0}")]
    Zip(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズ制限に違反した場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
