//! Grouping Module
//!
//! ニュース行をサプライヤ値で分割するモジュール。
//! グループの並び順は各サプライヤ値の初出順（安定）で、
//! ソートや正規化は一切行いません。

use std::collections::HashMap;

use crate::types::{NewsRow, SupplierGroup};

/// ニュース行をサプライヤごとのグループへ分割
///
/// サプライヤ値は大文字小文字・空白を区別して比較します。
/// グループの並び順は初出順、グループ内の行は入力順を保持します。
pub(crate) fn group_by_supplier(rows: Vec<NewsRow>) -> Vec<SupplierGroup> {
    let mut groups: Vec<SupplierGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for row in rows {
        match index_by_name.get(&row.supplier) {
            Some(&idx) => groups[idx].rows.push(row),
            None => {
                index_by_name.insert(row.supplier.clone(), groups.len());
                groups.push(SupplierGroup {
                    name: row.supplier.clone(),
                    rows: vec![row],
                });
            }
        }
    }

    groups
}
