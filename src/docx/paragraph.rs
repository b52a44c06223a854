//! Rich Paragraph Builder Module
//!
//! 段落とラン（書式付きテキスト）のモデルを定義するモジュール。
//! 上位レイヤはこのビルダーAPIだけでドキュメントを記述し、
//! WordprocessingMLの要素構造には触れません。

/// 段落の整列方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Alignment {
    /// 中央揃え
    Center,

    /// 両端揃え
    Justified,
}

impl Alignment {
    /// `w:jc`の属性値
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::Justified => "both",
        }
    }
}

/// 段落スペーシング（twip単位）
///
/// 見出し・タイトル以外の段落は`compact()`（行間最小12pt・前後0）を
/// 使用して、ブロックを視覚的に詰めます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Spacing {
    /// 段落前の間隔（twip）
    pub before_twips: u32,

    /// 段落後の間隔（twip）
    pub after_twips: u32,

    /// 最小行間（twip、lineRule=atLeast）
    pub line_twips: u32,
}

impl Spacing {
    /// 行間最小12pt（240twip）・前後0の圧縮スペーシング
    pub fn compact() -> Self {
        Self {
            before_twips: 0,
            after_twips: 0,
            line_twips: 240,
        }
    }
}

/// 段落下罫線（ディバイダ）
///
/// ニュースエントリの区切りとして使用される、空段落の下罫線です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BottomBorder {
    /// 線の太さ（1/8pt単位）
    pub size_eighth_pt: u32,

    /// テキストとの間隔（pt）
    pub space_pt: u32,
}

impl BottomBorder {
    /// 固定のディバイダ罫線（単線、sz=6、space=1、黒）
    pub fn divider() -> Self {
        Self {
            size_eighth_pt: 6,
            space_pt: 1,
        }
    }

    /// 罫線色（16進RGB）
    pub fn color(&self) -> &'static str {
        "000000"
    }
}

/// ラン書式
///
/// すべてのフィールドが未設定の場合、書式指定なしのランになります。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RunProps {
    /// フォントファミリ
    pub font: Option<String>,

    /// フォントサイズ（ハーフポイント単位）
    pub size_half_points: Option<u32>,

    /// 太字
    pub bold: bool,

    /// 斜体
    pub italic: bool,

    /// 下線（単線）
    pub underline: bool,

    /// 文字色（16進RGB、例: "1F497D"）
    pub color: Option<String>,
}

impl RunProps {
    /// 書式指定なしのランを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// フォントファミリを指定
    pub fn font(mut self, name: &str) -> Self {
        self.font = Some(name.to_string());
        self
    }

    /// フォントサイズをポイントで指定
    pub fn size_pt(mut self, points: u32) -> Self {
        self.size_half_points = Some(points * 2);
        self
    }

    /// 太字にする
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// 斜体にする
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// 下線（単線）を引く
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// 文字色を指定（16進RGB）
    pub fn color(mut self, hex: &str) -> Self {
        self.color = Some(hex.to_string());
        self
    }

    /// すべて未設定かどうか
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// 書式付きテキストラン
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Run {
    /// テキスト内容
    pub text: String,

    /// ラン書式
    pub props: RunProps,
}

/// 段落の子要素
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParagraphChild {
    /// 通常のテキストラン
    Run(Run),

    /// ハイパーリンクラン（rel_idはリレーションシップテーブルで採番済み）
    Hyperlink { rel_id: String, run: Run },

    /// 改ページ
    PageBreak,
}

/// 段落
///
/// スタイル参照・整列・スペーシング・下罫線と子要素列を保持します。
/// すべてのフィールドは構築後に変更されません。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Paragraph {
    /// 名前付きスタイルのID参照
    pub style_id: Option<String>,

    /// 整列方式
    pub alignment: Option<Alignment>,

    /// スペーシング
    pub spacing: Option<Spacing>,

    /// 下罫線（ディバイダ）
    pub bottom_border: Option<BottomBorder>,

    /// 子要素列（出現順）
    pub children: Vec<ParagraphChild>,
}

impl Paragraph {
    /// 空の段落を生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 名前付きスタイルを参照する段落を生成
    pub fn with_style(style_id: &str) -> Self {
        Self {
            style_id: Some(style_id.to_string()),
            ..Self::default()
        }
    }

    /// 改ページのみを含む段落を生成
    pub fn page_break() -> Self {
        Self {
            children: vec![ParagraphChild::PageBreak],
            ..Self::default()
        }
    }

    /// 整列方式を指定
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// スペーシングを指定
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// 下罫線を追加
    pub fn bottom_border(mut self, border: BottomBorder) -> Self {
        self.bottom_border = Some(border);
        self
    }

    /// 書式付きランを追加
    pub fn styled_run(mut self, text: &str, props: RunProps) -> Self {
        self.children.push(ParagraphChild::Run(Run {
            text: text.to_string(),
            props,
        }));
        self
    }

    /// ハイパーリンクランを追加
    ///
    /// `rel_id`は`DocumentBuilder::add_hyperlink_target`で採番された
    /// リレーションシップIDです。
    pub fn hyperlink_run(mut self, rel_id: &str, text: &str, props: RunProps) -> Self {
        self.children.push(ParagraphChild::Hyperlink {
            rel_id: rel_id.to_string(),
            run: Run {
                text: text.to_string(),
                props,
            },
        });
        self
    }

    /// ハイパーリンクランの個数
    #[allow(dead_code)]
    pub fn hyperlink_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| matches!(c, ParagraphChild::Hyperlink { .. }))
            .count()
    }

    /// 改ページを含むかどうか
    #[allow(dead_code)]
    pub fn has_page_break(&self) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, ParagraphChild::PageBreak))
    }
}
