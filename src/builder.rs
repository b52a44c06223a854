//! Builder Module
//!
//! Fluent Builder APIを提供し、`Generator`インスタンスを段階的に構築する。

use chrono::NaiveDate;
use std::io::{Read, Seek, Write};

use crate::api::{DateFormat, SheetSelector};
use crate::error::XlsxToDocxError;
use crate::group::group_by_supplier;
use crate::render::compose;
use crate::sheet::{WorkbookReader, DEFAULT_SOURCE_PREFIX};

/// 生成処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct GenerationConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 日付型セルの出力形式
    pub date_format: DateFormat,

    /// Sourceカラムとみなすヘッダープレフィックス
    pub source_prefix: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            date_format: DateFormat::Iso8601,
            source_prefix: DEFAULT_SOURCE_PREFIX.to_string(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Generator`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use newszero::{GeneratorBuilder, SheetSelector};
///
/// # fn main() -> Result<(), newszero::XlsxToDocxError> {
/// let generator = GeneratorBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("News".to_string()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GeneratorBuilder {
    /// 内部設定（構築中）
    config: GenerationConfig,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 先頭のシート
    /// - 日付形式: ISO 8601 (YYYY-MM-DD)
    /// - Sourceプレフィックス: `"Source"`
    pub fn new() -> Self {
        Self {
            config: GenerationConfig::default(),
        }
    }

    /// 読み込むシートを選択する
    ///
    /// # 引数
    ///
    /// * `selector: SheetSelector`: シート選択方式
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use newszero::{GeneratorBuilder, SheetSelector};
    ///
    /// // 先頭のシート（デフォルト）
    /// let builder = GeneratorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::First);
    ///
    /// // シートを名前で指定
    /// let builder = GeneratorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("News".to_string()));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 日付型セルの出力形式を指定する
    ///
    /// 文字列として入力された日付には影響しません（常にパススルー）。
    ///
    /// # 引数
    ///
    /// * `format: DateFormat`: 日付形式
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// Sourceカラムとみなすヘッダープレフィックスを指定する
    ///
    /// デフォルトは`"Source"`で、`Source 1` / `Source 2` ...のような
    /// カラムが列順に収集されます。
    ///
    /// # 引数
    ///
    /// * `prefix: &str`: プレフィックス（空文字列は`build()`でエラー）
    pub fn with_source_prefix(mut self, prefix: &str) -> Self {
        self.config.source_prefix = prefix.to_string();
        self
    }

    /// 設定を検証し、`Generator`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Generator)`: 設定が有効な場合
    /// * `Err(XlsxToDocxError::Config)`: 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlsxToDocxError::Config(String)`: 設定の検証に失敗した場合
    ///   * カスタム日付形式が不正な書式文字列
    ///   * Sourceプレフィックスが空文字列
    pub fn build(self) -> Result<Generator, XlsxToDocxError> {
        // 1. カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            // テスト用の日付でフォーマット試行
            let test_date = NaiveDate::from_ymd_opt(2025, 1, 1)
                .ok_or_else(|| XlsxToDocxError::Config("Failed to create test date".to_string()))?;
            let formatted = test_date.format(format_str).to_string();
            if formatted.is_empty() {
                return Err(XlsxToDocxError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        // 2. Sourceプレフィックスの検証
        if self.config.source_prefix.is_empty() {
            return Err(XlsxToDocxError::Config(
                "Source column prefix must not be empty".to_string(),
            ));
        }

        // 3. Generatorインスタンス生成
        Ok(Generator::new(self.config))
    }
}

/// 生成処理のファサード
///
/// ニュースシート（XLSX）からDOCXニュースレターを生成するための
/// メインエントリーポイントです。`GeneratorBuilder`を使用して構築された
/// 設定に基づいて、1回の呼び出しで読み込み・グルーピング・組み立て・
/// 書き出しを完結させます。呼び出しをまたいで共有される状態はありません。
///
/// # 使用例
///
/// ```rust,no_run
/// use newszero::GeneratorBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), newszero::XlsxToDocxError> {
/// let generator = GeneratorBuilder::new().build()?;
/// let input = File::open("news.xlsx")?;
/// let output = File::create("newsletter.docx")?;
/// generator.generate(input, "Weekly Newsletter", output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Generator {
    /// 生成設定
    config: GenerationConfig,
}

impl Generator {
    pub(crate) fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// ニュースシートからDOCXニュースレターを生成して書き出す
    ///
    /// # 引数
    ///
    /// * `input` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `title` - ドキュメント先頭に描画するタイトル文字列
    /// * `output` - DOCX出力先のライター（Writeトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 生成に成功した場合
    /// * `Err(XlsxToDocxError)` - エラーが発生した場合（部分出力は生成されない）
    ///
    /// # 処理フロー
    ///
    /// 1. ワークブックを開く（入力サイズ上限チェック込み）
    /// 2. シート選択
    /// 3. ヘッダースキャンとニュース行の抽出
    /// 4. サプライヤごとのグルーピング（初出順）
    /// 5. ドキュメント組み立て
    /// 6. OOXMLパッケージへの書き出し
    ///
    /// # 使用例
    ///
    /// ## メモリバッファからの生成
    ///
    /// ```rust,no_run
    /// use newszero::GeneratorBuilder;
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), newszero::XlsxToDocxError> {
    /// let generator = GeneratorBuilder::new().build()?;
    /// let excel_data: Vec<u8> = vec![]; // Excelファイルのバイト列
    /// let mut docx_output = Vec::new();
    /// generator.generate(Cursor::new(excel_data), "Weekly Newsletter", &mut docx_output)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn generate<R: Read + Seek, W: Write>(
        &self,
        input: R,
        title: &str,
        mut output: W,
    ) -> Result<(), XlsxToDocxError> {
        let bytes = self.generate_to_vec(input, title)?;
        output.write_all(&bytes)?;
        output.flush()?;
        Ok(())
    }

    /// ニュースシートからDOCXニュースレターを生成してバイト列で返す
    ///
    /// 生成されたバッファの所有権は即座に呼び出し側へ移ります。
    ///
    /// # 引数
    ///
    /// * `input` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `title` - ドキュメント先頭に描画するタイトル文字列
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<u8>)` - DOCXファイルのバイト列
    /// * `Err(XlsxToDocxError)` - エラーが発生した場合
    pub fn generate_to_vec<R: Read + Seek>(
        &self,
        input: R,
        title: &str,
    ) -> Result<Vec<u8>, XlsxToDocxError> {
        // 1. ワークブックを開く
        let mut reader = WorkbookReader::open(input)?;

        // 2. シート選択
        let sheet_name = reader.select_sheet(&self.config.sheet_selector)?;

        // 3. ニュース行の抽出
        let rows = reader.read_rows(&sheet_name, &self.config)?;

        // 4. サプライヤごとのグルーピング（初出順）
        let groups = group_by_supplier(rows);

        // 5. ドキュメント組み立て
        let document = compose(&groups, title);

        // 6. OOXMLパッケージへの書き出し
        document.save_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_builder_new() {
        let builder = GeneratorBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::First);
        assert_eq!(builder.config.date_format, DateFormat::Iso8601);
        assert_eq!(builder.config.source_prefix, "Source");
    }

    #[test]
    fn test_with_sheet_selector() {
        let builder = GeneratorBuilder::new().with_sheet_selector(SheetSelector::Index(2));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Index(2)
        ));

        let builder =
            GeneratorBuilder::new().with_sheet_selector(SheetSelector::Name("News".to_string()));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "News"
        ));
    }

    #[test]
    fn test_with_date_format() {
        let builder =
            GeneratorBuilder::new().with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()));
        assert!(matches!(
            builder.config.date_format,
            DateFormat::Custom(ref s) if s == "%Y/%m/%d"
        ));
    }

    #[test]
    fn test_with_source_prefix() {
        let builder = GeneratorBuilder::new().with_source_prefix("Link");
        assert_eq!(builder.config.source_prefix, "Link");
    }

    #[test]
    fn test_build_success() {
        let result = GeneratorBuilder::new().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_valid_custom_date_format() {
        let result = GeneratorBuilder::new()
            .with_date_format(DateFormat::Custom("%Y-%m-%d".to_string()))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_invalid_custom_date_format() {
        // 空のフォーマット文字列は無効
        let result = GeneratorBuilder::new()
            .with_date_format(DateFormat::Custom("".to_string()))
            .build();
        assert!(result.is_err());
        match result {
            Err(XlsxToDocxError::Config(msg)) => {
                assert!(msg.contains("Invalid date format"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_build_with_empty_source_prefix() {
        let result = GeneratorBuilder::new().with_source_prefix("").build();
        assert!(result.is_err());
        match result {
            Err(XlsxToDocxError::Config(msg)) => {
                assert!(msg.contains("prefix"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = GeneratorBuilder::new()
            .with_sheet_selector(SheetSelector::Index(0))
            .with_date_format(DateFormat::Iso8601)
            .with_source_prefix("Source");

        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Index(0)
        ));
        assert_eq!(builder.config.date_format, DateFormat::Iso8601);
        assert_eq!(builder.config.source_prefix, "Source");
    }

    #[test]
    fn test_generator_generate_with_invalid_input() {
        let generator = GeneratorBuilder::new().build().unwrap();
        // 無効な入力データ（空のVec）
        let invalid_input: Vec<u8> = vec![];
        let result =
            generator.generate_to_vec(std::io::Cursor::new(invalid_input), "Weekly Newsletter");
        // エラーが返されることを確認
        assert!(result.is_err());
    }
}
