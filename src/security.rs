//! Security Module
//!
//! 入力サイズ制限を実装するモジュール。
//! 生成処理は入力ファイル全体をメモリへバッファリングするため、
//! 読み込み前にサイズ上限を適用します。

use crate::error::XlsxToDocxError;

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 256MB (268_435_456 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 268_435_456, // 256MB
        }
    }
}

impl SecurityConfig {
    /// バッファリング済み入力のサイズを検証
    ///
    /// # 引数
    ///
    /// * `bytes_read` - 読み込んだバイト数
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - サイズが上限以内の場合
    /// * `Err(XlsxToDocxError::SecurityViolation)` - 上限を超えた場合
    pub fn check_input_size(&self, bytes_read: usize) -> Result<(), XlsxToDocxError> {
        if bytes_read as u64 > self.max_input_file_size {
            return Err(XlsxToDocxError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.max_input_file_size
            )));
        }
        Ok(())
    }
}
