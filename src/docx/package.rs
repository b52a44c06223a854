//! OOXML Package Writer Module
//!
//! `DocumentBuilder`の内容をOOXMLパッケージ（ZIPアーカイブ）として
//! 書き出すモジュール。XMLパートはquick-xmlのイベントライターで生成し、
//! zipクレートでパッケージングします。

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::docx::paragraph::{Paragraph, ParagraphChild, Run};
use crate::docx::rels::RelationshipTable;
use crate::docx::styles::StyleTable;
use crate::docx::DocumentBuilder;
use crate::error::XlsxToDocxError;

/// WordprocessingML本体の名前空間
const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// リレーションシップ参照の名前空間
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// パッケージリレーションシップの名前空間
const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// コンテンツタイプ定義の名前空間
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// ルートリレーションシップのofficeDocument型URI
const OFFICE_DOCUMENT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// document.xmlパートのコンテンツタイプ
const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// styles.xmlパートのコンテンツタイプ
const STYLES_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";

/// ドキュメント全体をOOXMLパッケージとして書き出す
pub(crate) fn write_package(doc: &DocumentBuilder) -> Result<Vec<u8>, XlsxToDocxError> {
    // 1. 各XMLパートを生成
    let parts: [(&str, Vec<u8>); 5] = [
        ("[Content_Types].xml", content_types_part()?),
        ("_rels/.rels", root_rels_part()?),
        ("word/document.xml", document_part(doc)?),
        ("word/_rels/document.xml.rels", document_rels_part(doc.rels())?),
        ("word/styles.xml", styles_part(doc.styles())?),
    ];

    // 2. ZIPアーカイブへパッケージング
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in &parts {
        zip.start_file(*name, options)
            .map_err(|e| XlsxToDocxError::Zip(e.to_string()))?;
        zip.write_all(bytes)?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| XlsxToDocxError::Zip(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// XML宣言済みのライターを生成
fn new_xml_writer() -> Result<Writer<Vec<u8>>, XlsxToDocxError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(writer)
}

/// 属性付きの開始タグを書き出す
fn start_el(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<(), XlsxToDocxError> {
    let mut el = BytesStart::new(name);
    for (key, value) in attrs {
        el.push_attribute((*key, *value));
    }
    writer.write_event(Event::Start(el))?;
    Ok(())
}

/// 属性付きの空要素を書き出す
fn empty_el(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    attrs: &[(&str, &str)],
) -> Result<(), XlsxToDocxError> {
    let mut el = BytesStart::new(name);
    for (key, value) in attrs {
        el.push_attribute((*key, *value));
    }
    writer.write_event(Event::Empty(el))?;
    Ok(())
}

/// 終了タグを書き出す
fn end_el(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), XlsxToDocxError> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `[Content_Types].xml`パート
fn content_types_part() -> Result<Vec<u8>, XlsxToDocxError> {
    let mut writer = new_xml_writer()?;
    start_el(&mut writer, "Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    empty_el(
        &mut writer,
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    empty_el(
        &mut writer,
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    empty_el(
        &mut writer,
        "Override",
        &[
            ("PartName", "/word/document.xml"),
            ("ContentType", DOCUMENT_CONTENT_TYPE),
        ],
    )?;
    empty_el(
        &mut writer,
        "Override",
        &[
            ("PartName", "/word/styles.xml"),
            ("ContentType", STYLES_CONTENT_TYPE),
        ],
    )?;
    end_el(&mut writer, "Types")?;
    Ok(writer.into_inner())
}

/// `_rels/.rels`パート
fn root_rels_part() -> Result<Vec<u8>, XlsxToDocxError> {
    let mut writer = new_xml_writer()?;
    start_el(&mut writer, "Relationships", &[("xmlns", NS_RELS)])?;
    empty_el(
        &mut writer,
        "Relationship",
        &[
            ("Id", "rId1"),
            ("Type", OFFICE_DOCUMENT_REL_TYPE),
            ("Target", "word/document.xml"),
        ],
    )?;
    end_el(&mut writer, "Relationships")?;
    Ok(writer.into_inner())
}

/// `word/_rels/document.xml.rels`パート
fn document_rels_part(rels: &RelationshipTable) -> Result<Vec<u8>, XlsxToDocxError> {
    let mut writer = new_xml_writer()?;
    start_el(&mut writer, "Relationships", &[("xmlns", NS_RELS)])?;
    for rel in rels.iter() {
        let mut attrs: Vec<(&str, &str)> = vec![
            ("Id", rel.id.as_str()),
            ("Type", rel.rel_type),
            ("Target", rel.target.as_str()),
        ];
        if rel.external {
            attrs.push(("TargetMode", "External"));
        }
        empty_el(&mut writer, "Relationship", &attrs)?;
    }
    end_el(&mut writer, "Relationships")?;
    Ok(writer.into_inner())
}

/// `word/styles.xml`パート
fn styles_part(styles: &StyleTable) -> Result<Vec<u8>, XlsxToDocxError> {
    let mut writer = new_xml_writer()?;
    start_el(&mut writer, "w:styles", &[("xmlns:w", NS_W)])?;

    for style in styles.iter() {
        start_el(
            &mut writer,
            "w:style",
            &[("w:type", "paragraph"), ("w:styleId", style.style_id.as_str())],
        )?;
        empty_el(&mut writer, "w:name", &[("w:val", style.name.as_str())])?;

        let before = style.space_before_twips.to_string();
        let after = style.space_after_twips.to_string();
        start_el(&mut writer, "w:pPr", &[])?;
        empty_el(
            &mut writer,
            "w:spacing",
            &[("w:before", before.as_str()), ("w:after", after.as_str())],
        )?;
        end_el(&mut writer, "w:pPr")?;

        start_el(&mut writer, "w:rPr", &[])?;
        empty_el(
            &mut writer,
            "w:rFonts",
            &[
                ("w:ascii", style.font.as_str()),
                ("w:hAnsi", style.font.as_str()),
                ("w:eastAsia", style.font.as_str()),
                ("w:cs", style.font.as_str()),
            ],
        )?;
        if style.bold {
            empty_el(&mut writer, "w:b", &[])?;
        }
        empty_el(&mut writer, "w:color", &[("w:val", style.color.as_str())])?;
        let size = style.size_half_points.to_string();
        empty_el(&mut writer, "w:sz", &[("w:val", size.as_str())])?;
        empty_el(&mut writer, "w:szCs", &[("w:val", size.as_str())])?;
        end_el(&mut writer, "w:rPr")?;

        end_el(&mut writer, "w:style")?;
    }

    end_el(&mut writer, "w:styles")?;
    Ok(writer.into_inner())
}

/// `word/document.xml`パート
fn document_part(doc: &DocumentBuilder) -> Result<Vec<u8>, XlsxToDocxError> {
    let mut writer = new_xml_writer()?;
    start_el(
        &mut writer,
        "w:document",
        &[("xmlns:w", NS_W), ("xmlns:r", NS_R)],
    )?;
    start_el(&mut writer, "w:body", &[])?;

    for paragraph in doc.paragraphs() {
        write_paragraph(&mut writer, paragraph)?;
    }

    // セクション設定（US Letter、余白は固定）
    let margin = doc.page_margin_twips().to_string();
    start_el(&mut writer, "w:sectPr", &[])?;
    empty_el(
        &mut writer,
        "w:pgSz",
        &[("w:w", "12240"), ("w:h", "15840")],
    )?;
    empty_el(
        &mut writer,
        "w:pgMar",
        &[
            ("w:top", margin.as_str()),
            ("w:right", margin.as_str()),
            ("w:bottom", margin.as_str()),
            ("w:left", margin.as_str()),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    end_el(&mut writer, "w:sectPr")?;

    end_el(&mut writer, "w:body")?;
    end_el(&mut writer, "w:document")?;
    Ok(writer.into_inner())
}

/// 段落1つを書き出す
fn write_paragraph(
    writer: &mut Writer<Vec<u8>>,
    paragraph: &Paragraph,
) -> Result<(), XlsxToDocxError> {
    start_el(writer, "w:p", &[])?;

    // 段落プロパティ（w:pPrのスキーマ順: pStyle, pBdr, spacing, jc）
    let has_props = paragraph.style_id.is_some()
        || paragraph.bottom_border.is_some()
        || paragraph.spacing.is_some()
        || paragraph.alignment.is_some();
    if has_props {
        start_el(writer, "w:pPr", &[])?;

        if let Some(ref style_id) = paragraph.style_id {
            empty_el(writer, "w:pStyle", &[("w:val", style_id.as_str())])?;
        }

        if let Some(border) = paragraph.bottom_border {
            let size = border.size_eighth_pt.to_string();
            let space = border.space_pt.to_string();
            start_el(writer, "w:pBdr", &[])?;
            empty_el(
                writer,
                "w:bottom",
                &[
                    ("w:val", "single"),
                    ("w:sz", size.as_str()),
                    ("w:space", space.as_str()),
                    ("w:color", border.color()),
                ],
            )?;
            end_el(writer, "w:pBdr")?;
        }

        if let Some(spacing) = paragraph.spacing {
            let before = spacing.before_twips.to_string();
            let after = spacing.after_twips.to_string();
            let line = spacing.line_twips.to_string();
            empty_el(
                writer,
                "w:spacing",
                &[
                    ("w:before", before.as_str()),
                    ("w:after", after.as_str()),
                    ("w:line", line.as_str()),
                    ("w:lineRule", "atLeast"),
                ],
            )?;
        }

        if let Some(alignment) = paragraph.alignment {
            empty_el(writer, "w:jc", &[("w:val", alignment.as_str())])?;
        }

        end_el(writer, "w:pPr")?;
    }

    for child in &paragraph.children {
        match child {
            ParagraphChild::Run(run) => write_run(writer, run)?,
            ParagraphChild::Hyperlink { rel_id, run } => {
                start_el(writer, "w:hyperlink", &[("r:id", rel_id.as_str())])?;
                write_run(writer, run)?;
                end_el(writer, "w:hyperlink")?;
            }
            ParagraphChild::PageBreak => {
                start_el(writer, "w:r", &[])?;
                empty_el(writer, "w:br", &[("w:type", "page")])?;
                end_el(writer, "w:r")?;
            }
        }
    }

    end_el(writer, "w:p")?;
    Ok(())
}

/// ラン1つを書き出す
fn write_run(writer: &mut Writer<Vec<u8>>, run: &Run) -> Result<(), XlsxToDocxError> {
    start_el(writer, "w:r", &[])?;

    // ラン書式（w:rPrのスキーマ順: rFonts, b, i, color, sz, szCs, u）
    if !run.props.is_default() {
        start_el(writer, "w:rPr", &[])?;
        if let Some(ref font) = run.props.font {
            empty_el(
                writer,
                "w:rFonts",
                &[
                    ("w:ascii", font.as_str()),
                    ("w:hAnsi", font.as_str()),
                    ("w:eastAsia", font.as_str()),
                    ("w:cs", font.as_str()),
                ],
            )?;
        }
        if run.props.bold {
            empty_el(writer, "w:b", &[])?;
        }
        if run.props.italic {
            empty_el(writer, "w:i", &[])?;
        }
        if let Some(ref color) = run.props.color {
            empty_el(writer, "w:color", &[("w:val", color.as_str())])?;
        }
        if let Some(size) = run.props.size_half_points {
            let size = size.to_string();
            empty_el(writer, "w:sz", &[("w:val", size.as_str())])?;
            empty_el(writer, "w:szCs", &[("w:val", size.as_str())])?;
        }
        if run.props.underline {
            empty_el(writer, "w:u", &[("w:val", "single")])?;
        }
        end_el(writer, "w:rPr")?;
    }

    // 先頭・末尾の空白を保持する（ラベルランは末尾が空白）
    start_el(writer, "w:t", &[("xml:space", "preserve")])?;
    writer.write_event(Event::Text(BytesText::new(&run.text)))?;
    end_el(writer, "w:t")?;

    end_el(writer, "w:r")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::paragraph::{Alignment, BottomBorder, RunProps, Spacing};
    use crate::docx::styles::ParagraphStyle;

    fn xml_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_content_types_part() {
        let xml = xml_string(content_types_part().unwrap());
        assert!(xml.contains("/word/document.xml"));
        assert!(xml.contains("wordprocessingml.document.main+xml"));
        assert!(xml.contains("wordprocessingml.styles+xml"));
    }

    #[test]
    fn test_root_rels_part() {
        let xml = xml_string(root_rels_part().unwrap());
        assert!(xml.contains("Target=\"word/document.xml\""));
        assert!(xml.contains("officeDocument"));
    }

    #[test]
    fn test_document_rels_part_marks_hyperlinks_external() {
        let mut rels = RelationshipTable::new();
        rels.add_hyperlink("https://example.com/a");
        let xml = xml_string(document_rels_part(&rels).unwrap());

        assert!(xml.contains("Target=\"styles.xml\""));
        assert!(xml.contains("Target=\"https://example.com/a\""));
        assert!(xml.contains("TargetMode=\"External\""));
    }

    #[test]
    fn test_styles_part_renders_registered_style() {
        let mut styles = StyleTable::new();
        styles.ensure(ParagraphStyle {
            style_id: "SupplierHeading".to_string(),
            name: "Supplier Heading".to_string(),
            font: "Arial".to_string(),
            size_half_points: 24,
            bold: true,
            color: "1F497D".to_string(),
            space_before_twips: 240,
            space_after_twips: 120,
        });
        let xml = xml_string(styles_part(&styles).unwrap());

        assert!(xml.contains("w:styleId=\"SupplierHeading\""));
        assert!(xml.contains("w:val=\"Supplier Heading\""));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("w:val=\"1F497D\""));
        assert!(xml.contains("w:before=\"240\""));
        assert!(xml.contains("w:after=\"120\""));
    }

    #[test]
    fn test_document_part_paragraph_and_margins() {
        let mut doc = DocumentBuilder::new();
        doc.push(
            Paragraph::new()
                .align(Alignment::Justified)
                .spacing(Spacing::compact())
                .styled_run("Headline", RunProps::new().bold().color("1F497D")),
        );
        let xml = xml_string(document_part(&doc).unwrap());

        assert!(xml.contains("<w:jc w:val=\"both\"/>"));
        assert!(xml.contains("w:lineRule=\"atLeast\""));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains(">Headline</w:t>"));
        assert!(xml.contains("w:top=\"720\""));
    }

    #[test]
    fn test_document_part_page_break() {
        let mut doc = DocumentBuilder::new();
        doc.push(Paragraph::page_break());
        let xml = xml_string(document_part(&doc).unwrap());

        assert!(xml.contains("<w:br w:type=\"page\"/>"));
    }

    #[test]
    fn test_document_part_divider_border() {
        let mut doc = DocumentBuilder::new();
        doc.push(
            Paragraph::new()
                .bottom_border(BottomBorder::divider())
                .spacing(Spacing::compact()),
        );
        let xml = xml_string(document_part(&doc).unwrap());

        assert!(xml.contains("<w:pBdr>"));
        assert!(xml.contains("w:sz=\"6\""));
        assert!(xml.contains("w:space=\"1\""));
        assert!(xml.contains("w:color=\"000000\""));
    }

    #[test]
    fn test_document_part_hyperlink_run() {
        let mut doc = DocumentBuilder::new();
        let rel_id = doc.add_hyperlink_target("https://example.com/a");
        doc.push(Paragraph::new().hyperlink_run(
            &rel_id,
            "Read More",
            RunProps::new().underline().color("4F81BD"),
        ));
        let xml = xml_string(document_part(&doc).unwrap());

        assert!(xml.contains("<w:hyperlink r:id=\"rId2\">"));
        assert!(xml.contains("<w:u w:val=\"single\"/>"));
        assert!(xml.contains(">Read More</w:t>"));
    }

    #[test]
    fn test_run_text_escapes_markup() {
        let mut doc = DocumentBuilder::new();
        doc.push(Paragraph::new().styled_run("A & B <C>", RunProps::new()));
        let xml = xml_string(document_part(&doc).unwrap());

        assert!(xml.contains("A &amp; B &lt;C&gt;"));
    }

    #[test]
    fn test_run_preserves_trailing_space() {
        let mut doc = DocumentBuilder::new();
        doc.push(Paragraph::new().styled_run("Label: ", RunProps::new().bold()));
        let xml = xml_string(document_part(&doc).unwrap());

        assert!(xml.contains("xml:space=\"preserve\""));
        assert!(xml.contains(">Label: </w:t>"));
    }

    #[test]
    fn test_write_package_contains_all_parts() {
        let mut doc = DocumentBuilder::new();
        doc.push(Paragraph::new().styled_run("hello", RunProps::new()));
        let bytes = write_package(&doc).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"word/document.xml".to_string()));
        assert!(names.contains(&"word/_rels/document.xml.rels".to_string()));
        assert!(names.contains(&"word/styles.xml".to_string()));
    }
}
