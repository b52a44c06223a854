//! Cell Value Coercion Module
//!
//! セル値のテキスト変換を提供するモジュール。
//! 文字列セルは入力のまま、数値・論理値は文字列化、日付型セルのみ
//! 設定された日付形式で変換します。

use calamine::Data;
use chrono::{Duration, NaiveDate};

use crate::api::DateFormat;
use crate::error::XlsxToDocxError;

/// セル値をテキストに変換
///
/// 文字列として入力された日付はここを素通りします（再フォーマットなし）。
/// Excelの日付型セル（シリアル日付値）のみ`date_format`で変換されます。
/// 空セルは空文字列になります（エラーではない）。
///
/// # 引数
///
/// * `cell` - calamineのセルデータ
/// * `date_format` - 日付型セルの出力形式
///
/// # 戻り値
///
/// * `Ok(String)` - 変換済みテキスト
/// * `Err(XlsxToDocxError)` - 日付変換でオーバーフローが発生した場合
pub(crate) fn cell_to_text(
    cell: &Data,
    date_format: &DateFormat,
) -> Result<String, XlsxToDocxError> {
    let text = match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("{:?}", e),
        Data::DateTime(dt) => format_serial_date(dt.as_f64(), date_format)?,
        Data::DateTimeIso(s) => s.clone(),
        _ => String::new(),
    };
    Ok(text)
}

/// Excelのシリアル日付値を日付テキストに変換
///
/// 1900年エポックシステム（1899年12月31日起算）で変換します。
///
/// # エポックシステム
///
/// - シリアル値1 = 1900年1月1日
/// - シリアル値60 = 1900年2月29日（実在しない日、Excelのうるう年バグ）
/// - シリアル値61以降は1日分を補正して実在する日付に対応させる
///
/// # 引数
///
/// * `serial_value` - Excelのシリアル日付値
/// * `date_format` - 出力形式
///
/// # 戻り値
///
/// * `Ok(String)` - フォーマット済み日付文字列
/// * `Err(XlsxToDocxError::Config)` - 日付計算がオーバーフローした場合
pub(crate) fn format_serial_date(
    serial_value: f64,
    date_format: &DateFormat,
) -> Result<String, XlsxToDocxError> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 31)
        .ok_or_else(|| XlsxToDocxError::Config("Invalid epoch date".to_string()))?;

    let days = serial_value.floor() as i64;
    // Excelのうるう年バグ: シリアル値60（1900-02-29）以降は1日ずれる
    let adjusted = if days < 60 { days } else { days - 1 };

    let date = epoch
        .checked_add_signed(Duration::days(adjusted))
        .ok_or_else(|| {
            XlsxToDocxError::Config(format!(
                "Date calculation overflow: serial_value={}",
                serial_value
            ))
        })?;

    let formatted = match date_format {
        DateFormat::Iso8601 => date.format("%Y-%m-%d").to_string(),
        DateFormat::Custom(format_str) => date.format(format_str).to_string(),
    };

    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_text_string_passthrough() {
        let cell = Data::String("2025-07-20".to_string());
        let result = cell_to_text(&cell, &DateFormat::Iso8601).unwrap();
        // 文字列の日付は再フォーマットされない
        assert_eq!(result, "2025-07-20");
    }

    #[test]
    fn test_cell_to_text_string_locale_date_passthrough() {
        // ロケール依存の日付文字列もパススルー
        let cell = Data::String("20/07/2025".to_string());
        let result = cell_to_text(&cell, &DateFormat::Iso8601).unwrap();
        assert_eq!(result, "20/07/2025");
    }

    #[test]
    fn test_cell_to_text_numbers() {
        assert_eq!(
            cell_to_text(&Data::Int(42), &DateFormat::Iso8601).unwrap(),
            "42"
        );
        assert_eq!(
            cell_to_text(&Data::Float(42.0), &DateFormat::Iso8601).unwrap(),
            "42"
        );
        assert_eq!(
            cell_to_text(&Data::Float(3.5), &DateFormat::Iso8601).unwrap(),
            "3.5"
        );
    }

    #[test]
    fn test_cell_to_text_bool() {
        assert_eq!(
            cell_to_text(&Data::Bool(true), &DateFormat::Iso8601).unwrap(),
            "TRUE"
        );
        assert_eq!(
            cell_to_text(&Data::Bool(false), &DateFormat::Iso8601).unwrap(),
            "FALSE"
        );
    }

    #[test]
    fn test_cell_to_text_empty() {
        assert_eq!(
            cell_to_text(&Data::Empty, &DateFormat::Iso8601).unwrap(),
            ""
        );
    }

    #[test]
    fn test_format_serial_date_iso8601() {
        // シリアル値1 = 1900年1月1日
        let result = format_serial_date(1.0, &DateFormat::Iso8601).unwrap();
        assert_eq!(result, "1900-01-01");

        // シリアル値59 = 1900年2月28日
        let result = format_serial_date(59.0, &DateFormat::Iso8601).unwrap();
        assert_eq!(result, "1900-02-28");

        // シリアル値61 = 1900年3月1日（うるう年バグの補正後）
        let result = format_serial_date(61.0, &DateFormat::Iso8601).unwrap();
        assert_eq!(result, "1900-03-01");

        // シリアル値45658 = 2025年1月1日
        let result = format_serial_date(45658.0, &DateFormat::Iso8601).unwrap();
        assert_eq!(result, "2025-01-01");
    }

    #[test]
    fn test_format_serial_date_custom() {
        let format = DateFormat::Custom("%Y/%m/%d".to_string());
        let result = format_serial_date(1.0, &format).unwrap();
        assert_eq!(result, "1900/01/01");
    }

    #[test]
    fn test_format_serial_date_fractional_time_ignored() {
        // 時刻成分（小数部）は日付へ切り捨て
        let result = format_serial_date(45658.75, &DateFormat::Iso8601).unwrap();
        assert_eq!(result, "2025-01-01");
    }

    // プロパティベーステスト: 日付変換の単調性
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// シリアル値の大小関係がISO 8601文字列の大小関係と一致することを確認
            #[test]
            fn test_date_conversion_monotonicity(
                serial1 in 61.0f64..80000.0,
                serial2 in 61.0f64..80000.0
            ) {
                let date1 = format_serial_date(serial1, &DateFormat::Iso8601).unwrap();
                let date2 = format_serial_date(serial2, &DateFormat::Iso8601).unwrap();

                if serial1.floor() < serial2.floor() {
                    prop_assert!(date1 < date2,
                        "Date monotonicity violated: serial1={} ({}) < serial2={} ({})",
                        serial1, date1, serial2, date2);
                } else if serial1.floor() > serial2.floor() {
                    prop_assert!(date1 > date2,
                        "Date monotonicity violated: serial1={} ({}) > serial2={} ({})",
                        serial1, date1, serial2, date2);
                } else {
                    prop_assert_eq!(date1, date2);
                }
            }
        }
    }
}
