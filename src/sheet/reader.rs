//! Reader Module
//!
//! calamineを使用したワークブック読み込みの実装。
//! シート選択とニュース行の抽出を提供します。

use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets, Xlsx};
use std::io::{Cursor, Read, Seek};

use crate::api::{DateFormat, SheetSelector};
use crate::builder::GenerationConfig;
use crate::error::XlsxToDocxError;
use crate::security::SecurityConfig;
use crate::sheet::schema::{SheetSchema, COLUMN_SUPPLIER};
use crate::sheet::value::cell_to_text;
use crate::types::NewsRow;

/// ワークブックリーダー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
pub(crate) struct WorkbookReader<R: Read + Seek + Clone> {
    /// calamineのワークブック（XLSX形式のみサポート）
    workbook: Xlsx<R>,
}

impl WorkbookReader<Cursor<Vec<u8>>> {
    /// ワークブックを開く
    ///
    /// 入力全体をメモリへバッファリングしてから開きます。
    /// バッファリング前にサイズ上限を適用します。
    ///
    /// # 引数
    ///
    /// * `reader` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookReader)` - ワークブックの読み込みに成功した場合
    /// * `Err(XlsxToDocxError)` - エラーが発生した場合
    pub fn open<R: Read + Seek>(mut reader: R) -> Result<Self, XlsxToDocxError> {
        // 1. 入力データをメモリに読み込む
        let security_config = SecurityConfig::default();
        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;
        security_config.check_input_size(bytes_read)?;

        // 2. calamineでワークブックを開く
        let sheets =
            open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(XlsxToDocxError::Parse)?;
        let workbook = match sheets {
            Sheets::Xlsx(workbook) => workbook,
            _ => {
                return Err(XlsxToDocxError::Config(
                    "Only XLSX format is supported".to_string(),
                ))
            }
        };

        Ok(Self { workbook })
    }
}

impl<R: Read + Seek + Clone> WorkbookReader<R> {
    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいて1シートを選択
    ///
    /// # 引数
    ///
    /// * `selector` - シート選択方式
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(XlsxToDocxError::Config)` - シートが見つからない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, XlsxToDocxError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names.first().cloned().ok_or_else(|| {
                XlsxToDocxError::Config("Workbook contains no sheets".to_string())
            }),

            SheetSelector::Index(index) => {
                if *index >= all_sheet_names.len() {
                    return Err(XlsxToDocxError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    )));
                }
                Ok(all_sheet_names[*index].clone())
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(XlsxToDocxError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// シートからニュース行を抽出
    ///
    /// 先頭行をヘッダーとしてスキーマをスキャンし、残りの行を
    /// `NewsRow`へ変換します。`Supplier`セルが空の行はスキップされます
    /// （グルーピング対象外）。
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み込むシート名
    /// * `config` - 生成設定
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<NewsRow>)` - 抽出されたニュース行（入力順）
    /// * `Err(XlsxToDocxError)` - 必須カラム欠損、またはパースエラー
    pub fn read_rows(
        &mut self,
        sheet_name: &str,
        config: &GenerationConfig,
    ) -> Result<Vec<NewsRow>, XlsxToDocxError> {
        // 1. シートの取得
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| XlsxToDocxError::Parse(e.into()))?;

        // 2. ヘッダー行のスキーマスキャン（1回のみ）
        let mut rows_iter = range.rows();
        let header = rows_iter.next().ok_or_else(|| XlsxToDocxError::MissingColumn {
            column: COLUMN_SUPPLIER.to_string(),
        })?;
        let schema = SheetSchema::scan(header, &config.source_prefix)?;

        // 3. データ行の抽出
        let mut rows = Vec::new();
        for raw in rows_iter {
            let row = extract_row(raw, &schema, &config.date_format)?;
            if !row.has_supplier() {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

/// 1行分のセル列を`NewsRow`へ変換
///
/// 欠損セルは空文字列になります。Sourceカラムの値はトリム後、
/// 空文字列と"nan"プレースホルダ（大文字小文字不問）を除外します。
fn extract_row(
    cells: &[Data],
    schema: &SheetSchema,
    date_format: &DateFormat,
) -> Result<NewsRow, XlsxToDocxError> {
    let cell_text = |idx: usize| -> Result<String, XlsxToDocxError> {
        cell_to_text(cells.get(idx).unwrap_or(&Data::Empty), date_format)
    };

    let mut sources = Vec::new();
    for &idx in &schema.source_cols {
        let value = cell_text(idx)?;
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            continue;
        }
        sources.push(trimmed.to_string());
    }

    Ok(NewsRow {
        supplier: cell_text(schema.supplier_col)?,
        category: cell_text(schema.category_col)?,
        date: cell_text(schema.date_col)?,
        headline: cell_text(schema.headline_col)?,
        summary: cell_text(schema.summary_col)?,
        sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::schema::DEFAULT_SOURCE_PREFIX;

    fn schema() -> SheetSchema {
        let header: Vec<Data> = [
            "Supplier", "Category", "Date", "Headline", "Summary", "Source 1", "Source 2",
        ]
        .iter()
        .map(|n| Data::String((*n).to_string()))
        .collect();
        SheetSchema::scan(&header, DEFAULT_SOURCE_PREFIX).unwrap()
    }

    fn string_cells(values: &[&str]) -> Vec<Data> {
        values
            .iter()
            .map(|v| Data::String((*v).to_string()))
            .collect()
    }

    #[test]
    fn test_extract_row_basic() {
        let cells = string_cells(&[
            "Cognizant",
            "Earnings",
            "2025-07-20",
            "Q2 results",
            "Revenue up.",
            "https://example.com/a",
            "https://example.com/b",
        ]);
        let row = extract_row(&cells, &schema(), &DateFormat::Iso8601).unwrap();

        assert_eq!(row.supplier, "Cognizant");
        assert_eq!(row.category, "Earnings");
        assert_eq!(row.date, "2025-07-20");
        assert_eq!(row.headline, "Q2 results");
        assert_eq!(row.summary, "Revenue up.");
        assert_eq!(
            row.sources,
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn test_extract_row_filters_empty_and_nan_sources() {
        let mut cells = string_cells(&[
            "Cognizant",
            "Earnings",
            "2025-07-20",
            "Q2 results",
            "Revenue up.",
        ]);
        cells.push(Data::String("  nan  ".to_string()));
        cells.push(Data::String("NaN".to_string()));
        let row = extract_row(&cells, &schema(), &DateFormat::Iso8601).unwrap();

        assert!(row.sources.is_empty());
    }

    #[test]
    fn test_extract_row_trims_source_urls_only() {
        let cells = string_cells(&[
            " Cognizant ",
            "Earnings",
            "2025-07-20",
            "Q2 results",
            "Revenue up.",
            "  https://example.com/a  ",
            "",
        ]);
        let row = extract_row(&cells, &schema(), &DateFormat::Iso8601).unwrap();

        // サプライヤは空白込みのまま（グルーピングは空白を区別する）
        assert_eq!(row.supplier, " Cognizant ");
        assert_eq!(row.sources, vec!["https://example.com/a"]);
    }

    #[test]
    fn test_extract_row_short_row_pads_empty() {
        let cells = string_cells(&["Cognizant", "Earnings"]);
        let row = extract_row(&cells, &schema(), &DateFormat::Iso8601).unwrap();

        assert_eq!(row.supplier, "Cognizant");
        assert_eq!(row.date, "");
        assert_eq!(row.headline, "");
        assert_eq!(row.summary, "");
        assert!(row.sources.is_empty());
    }

    #[test]
    fn test_extract_row_numeric_date_coerced() {
        let mut cells = string_cells(&["Cognizant", "Earnings"]);
        cells.push(Data::Float(45658.0));
        cells.extend(string_cells(&["Q2 results", "Revenue up."]));
        let row = extract_row(&cells, &schema(), &DateFormat::Iso8601).unwrap();

        // 数値セルは文字列化される（日付型セルではないので日付変換なし）
        assert_eq!(row.date, "45658");
    }
}
