//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

/// ニュースシートの1レコード
///
/// すべてのフィールドは抽出時にテキストへ変換済みです。
/// 欠損セルは空文字列として保持されます（エラーにはなりません）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewsRow {
    /// グルーピングキー（大文字小文字・空白を区別）
    pub supplier: String,

    /// ニュースのカテゴリ
    pub category: String,

    /// 日付テキスト（入力のまま、再フォーマットなし）
    pub date: String,

    /// 見出し
    pub headline: String,

    /// 要約
    pub summary: String,

    /// 記事URL（`Source`プレフィックスカラムから列順に収集、空値を除外）
    ///
    /// 不変条件: 空であってもよい。リンクラベルの単複は
    /// `sources.len() > 1` で決まる。
    pub sources: Vec<String>,
}

impl NewsRow {
    /// 行が空かどうかを判定（サプライヤ欠損の行はグルーピング対象外）
    pub fn has_supplier(&self) -> bool {
        !self.supplier.is_empty()
    }
}

/// 同一サプライヤのニュース行をまとめたグループ
///
/// グループは導出データであり、永続化されません。グループの並び順は
/// 入力テーブル中で各サプライヤ値が最初に出現した順序に従います
/// （アルファベット順ではない）。グループ内の行は入力順を保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SupplierGroup {
    /// サプライヤ名（入力値のまま、正規化なし）
    pub name: String,

    /// グループに属する行（入力順）
    pub rows: Vec<NewsRow>,
}
