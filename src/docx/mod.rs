//! DOCX Writer Module
//!
//! WordprocessingML（DOCX）の最小限の書き出しを提供するモジュール。
//! 段落モデル（`paragraph`）、スタイルテーブル（`styles`）、
//! リレーションシップテーブル（`rels`）、OOXMLパッケージ書き出し
//! （`package`）で構成されます。
//!
//! DOCX固有のXML要素名はこのモジュールの外へ漏らしません。
//! 上位レイヤは`Paragraph`ビルダーと`DocumentBuilder`のみを操作します。

mod package;
pub(crate) mod paragraph;
mod rels;
mod styles;

pub(crate) use paragraph::{Alignment, BottomBorder, Paragraph, RunProps, Spacing};
pub(crate) use styles::{ParagraphStyle, StyleTable};

use crate::error::XlsxToDocxError;
use rels::RelationshipTable;

/// ページ余白（twip単位、36pt = 720twip）
const PAGE_MARGIN_TWIPS: u32 = 720;

/// 組み立て中のDOCXドキュメント
///
/// 段落列・スタイルテーブル・リレーションシップテーブルを1回の
/// 生成呼び出しのスコープ内で所有します。呼び出しをまたいで共有される
/// 状態はありません。
#[derive(Debug)]
pub(crate) struct DocumentBuilder {
    /// 本文の段落列（出現順）
    paragraphs: Vec<Paragraph>,

    /// ドキュメント単位のスタイルテーブル
    styles: StyleTable,

    /// ドキュメント単位のリレーションシップテーブル
    rels: RelationshipTable,

    /// ページ余白（twip）
    page_margin_twips: u32,
}

impl DocumentBuilder {
    /// 空のドキュメントを生成
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            styles: StyleTable::new(),
            rels: RelationshipTable::new(),
            page_margin_twips: PAGE_MARGIN_TWIPS,
        }
    }

    /// スタイルテーブルへの可変参照を取得
    pub fn styles_mut(&mut self) -> &mut StyleTable {
        &mut self.styles
    }

    /// スタイルテーブルを取得
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// リレーションシップテーブルを取得
    pub fn rels(&self) -> &RelationshipTable {
        &self.rels
    }

    /// 本文の段落列を取得
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// ページ余白（twip）を取得
    pub fn page_margin_twips(&self) -> u32 {
        self.page_margin_twips
    }

    /// 段落を末尾に追加
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// ハイパーリンク先URLを外部リレーションシップとして登録し、rIdを返す
    ///
    /// 返されたrIdは`Paragraph::hyperlink_run`に渡します。
    pub fn add_hyperlink_target(&mut self, url: &str) -> String {
        self.rels.add_hyperlink(url)
    }

    /// OOXMLパッケージとしてバイトバッファへ書き出す
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<u8>)` - DOCXファイルのバイト列
    /// * `Err(XlsxToDocxError)` - XML書き出しまたはZIP書き出しに失敗した場合
    pub fn save_to_vec(&self) -> Result<Vec<u8>, XlsxToDocxError> {
        package::write_package(self)
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
