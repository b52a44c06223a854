//! Sheet Ingestion Module
//!
//! calamineを使用したニュースシート読み込みの実装。
//! ヘッダー行のスキーマスキャンと行データの抽出を提供します。

mod reader;
mod schema;
mod value;

pub(crate) use reader::WorkbookReader;
pub(crate) use schema::DEFAULT_SOURCE_PREFIX;
