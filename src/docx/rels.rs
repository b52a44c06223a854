//! Relationship Table Module
//!
//! ドキュメント内部のリレーションシップ（`word/_rels/document.xml.rels`）を
//! 管理するモジュール。ハイパーリンク先URLを外部リレーションシップとして
//! 登録し、ランが参照するrIdを採番します。

/// スタイルパートのリレーションシップ型URI
pub(crate) const STYLES_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// ハイパーリンクのリレーションシップ型URI
pub(crate) const HYPERLINK_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// 1件のリレーションシップ
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Relationship {
    /// リレーションシップID（例: "rId2"）
    pub id: String,

    /// リレーションシップ型URI
    pub rel_type: &'static str,

    /// ターゲット（パートパスまたは外部URL）
    pub target: String,

    /// 外部ターゲットかどうか（ハイパーリンクはtrue）
    pub external: bool,
}

/// ドキュメント単位のリレーションシップテーブル
///
/// rId1はスタイルパート用に予約され、ハイパーリンクはrId2から
/// 採番されます。
#[derive(Debug)]
pub(crate) struct RelationshipTable {
    relationships: Vec<Relationship>,
}

impl RelationshipTable {
    /// スタイルパートのリレーションシップのみを持つテーブルを生成
    pub fn new() -> Self {
        Self {
            relationships: vec![Relationship {
                id: "rId1".to_string(),
                rel_type: STYLES_REL_TYPE,
                target: "styles.xml".to_string(),
                external: false,
            }],
        }
    }

    /// ハイパーリンク先URLを外部リレーションシップとして登録
    ///
    /// 登録のたびに新しいrIdを採番して返します。同一URLでも
    /// 呼び出しごとに別のリレーションシップになります。
    pub fn add_hyperlink(&mut self, url: &str) -> String {
        let id = format!("rId{}", self.relationships.len() + 1);
        self.relationships.push(Relationship {
            id: id.clone(),
            rel_type: HYPERLINK_REL_TYPE,
            target: url.to_string(),
            external: true,
        });
        id
    }

    /// 登録済みリレーションシップのイテレータ（採番順）
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    /// ハイパーリンクリレーションシップの個数
    #[allow(dead_code)]
    pub fn hyperlink_count(&self) -> usize {
        self.relationships.iter().filter(|r| r.external).count()
    }
}

impl Default for RelationshipTable {
    fn default() -> Self {
        Self::new()
    }
}
