//! Newsletter Assembly Module
//!
//! サプライヤグループ列とタイトルからDOCXドキュメントを組み立てる
//! モジュール。レイアウト（タイトルブロック、サプライヤセクション、
//! エントリブロック、ディバイダ）はすべてここで決まります。

use crate::docx::{
    Alignment, BottomBorder, DocumentBuilder, Paragraph, ParagraphStyle, RunProps, Spacing,
    StyleTable,
};
use crate::types::{NewsRow, SupplierGroup};

/// 見出し・タイトルのアクセント色（16進RGB）
const ACCENT_COLOR: &str = "1F497D";

/// ハイパーリンクの文字色（16進RGB）
const LINK_COLOR: &str = "4F81BD";

/// タイトルのフォントファミリ
const TITLE_FONT: &str = "Cambria";

/// 本文のフォントファミリ
const BODY_FONT: &str = "Calibri";

/// ラベル・見出しのフォントファミリ
const LABEL_FONT: &str = "Arial";

/// サプライヤ見出しスタイルのID
const HEADING_STYLE_ID: &str = "SupplierHeading";

/// サプライヤ見出しスタイルの表示名
const HEADING_STYLE_NAME: &str = "Supplier Heading";

/// ハイパーリンクの表示テキスト（全リンク共通）
const LINK_TEXT: &str = "Read More";

/// サプライヤグループ列とタイトルからドキュメントを組み立てる
///
/// - タイトルブロック（中央揃え、Cambria 20pt太字）と1行分の空き
/// - 2番目以降のグループの前に改ページ（先頭グループはタイトル直後）
/// - グループごとに大文字化したサプライヤ見出しとエントリブロック列
pub(crate) fn compose(groups: &[SupplierGroup], title: &str) -> DocumentBuilder {
    let mut doc = DocumentBuilder::new();

    // 1. タイトルブロック
    doc.push(
        Paragraph::new().align(Alignment::Center).styled_run(
            title,
            RunProps::new()
                .font(TITLE_FONT)
                .size_pt(20)
                .bold()
                .color(ACCENT_COLOR),
        ),
    );
    doc.push(Paragraph::new());

    // 2. サプライヤ見出しスタイルの登録（冪等）
    ensure_heading_style(doc.styles_mut());

    // 3. グループごとのセクション
    for (group_idx, group) in groups.iter().enumerate() {
        if group_idx > 0 {
            doc.push(Paragraph::page_break());
        }

        doc.push(
            Paragraph::with_style(HEADING_STYLE_ID)
                .spacing(Spacing::compact())
                .styled_run(&group.name.to_uppercase(), RunProps::new()),
        );
        doc.push(spacer());

        for row in &group.rows {
            push_row(&mut doc, row);
        }
    }

    doc
}

/// サプライヤ見出しスタイルを登録する（登録済みなら何もしない）
fn ensure_heading_style(styles: &mut StyleTable) {
    styles.ensure(ParagraphStyle {
        style_id: HEADING_STYLE_ID.to_string(),
        name: HEADING_STYLE_NAME.to_string(),
        font: LABEL_FONT.to_string(),
        size_half_points: 24,
        bold: true,
        color: ACCENT_COLOR.to_string(),
        space_before_twips: 240,
        space_after_twips: 120,
    });
}

/// ニュース1件分のブロック列を追加する
///
/// 見出し行、日付行、要約行、メタデータ・リンク行、ディバイダの順。
/// 欠損フィールドは空テキストのランとして描画されます。
fn push_row(doc: &mut DocumentBuilder, row: &NewsRow) {
    // 見出し行（太字、両端揃え）
    doc.push(
        Paragraph::new()
            .align(Alignment::Justified)
            .spacing(Spacing::compact())
            .styled_run(
                &row.headline,
                RunProps::new()
                    .font(BODY_FONT)
                    .size_pt(12)
                    .bold()
                    .color(ACCENT_COLOR),
            ),
    );

    // 日付行（斜体、入力のまま）
    doc.push(
        Paragraph::new()
            .align(Alignment::Justified)
            .spacing(Spacing::compact())
            .styled_run(&row.date, RunProps::new().font(BODY_FONT).size_pt(12).italic()),
    );
    doc.push(spacer());

    // 要約行
    doc.push(
        Paragraph::new()
            .align(Alignment::Justified)
            .spacing(Spacing::compact())
            .styled_run(&row.summary, RunProps::new().font(BODY_FONT).size_pt(12)),
    );
    doc.push(spacer());

    // メタデータ・リンク行
    let mut meta = Paragraph::new().spacing(Spacing::compact()).styled_run(
        &meta_label(&row.category, row.sources.len()),
        RunProps::new().font(LABEL_FONT).size_pt(10).bold(),
    );
    for (idx, url) in row.sources.iter().enumerate() {
        if idx > 0 {
            meta = meta.styled_run(", ", RunProps::new());
        }
        let rel_id = doc.add_hyperlink_target(url);
        meta = meta.hyperlink_run(&rel_id, LINK_TEXT, link_props());
    }
    doc.push(meta);

    // ディバイダ（下罫線付きの空段落）
    doc.push(
        Paragraph::new()
            .bottom_border(BottomBorder::divider())
            .spacing(Spacing::compact()),
    );
    doc.push(spacer());
}

/// メタデータ行のラベルテキストを生成
///
/// リンクラベルの単複は`source_count > 1`で決まります。
/// ソース0件でも単数形ラベルが描画されます（リンクランなし）。
fn meta_label(category: &str, source_count: usize) -> String {
    let plural = if source_count > 1 { "links" } else { "link" };
    format!("Category: {} | Web {} to Full Story: ", category, plural)
}

/// ハイパーリンクランの固定書式（全リンク共通）
fn link_props() -> RunProps {
    RunProps::new()
        .font(LABEL_FONT)
        .size_pt(10)
        .bold()
        .italic()
        .underline()
        .color(LINK_COLOR)
}

/// 圧縮スペーシングの空段落
fn spacer() -> Paragraph {
    Paragraph::new().spacing(Spacing::compact())
}
