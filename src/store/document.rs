use super::DecodePolicy;
use crate::error::{CalorieError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSON配列ファイルを読み込む
///
/// ファイルが無い、または空白のみの場合は空の配列を返す。
pub(crate) fn read_array<T: DeserializeOwned>(path: &Path, policy: DecodePolicy) -> Result<Vec<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "データファイルなし、空として扱います");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str(&content) {
        Ok(items) => Ok(items),
        Err(source) => match policy {
            DecodePolicy::Strict => Err(CalorieError::Decode {
                path: path.display().to_string(),
                source,
            }),
            DecodePolicy::RecoverEmpty => {
                tracing::warn!(
                    path = %path.display(),
                    error = %source,
                    "データファイルを解析できません、空として扱います"
                );
                Ok(Vec::new())
            }
        },
    }
}

/// JSON配列ファイルを書き込む（4スペースインデント）
///
/// 同じディレクトリの一時ファイルに書いてから置き換える。
pub(crate) fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items.serialize(&mut serializer)?;

    let tmp = temp_path(path);
    std::fs::write(&tmp, &buf)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), count = items.len(), "データファイルを保存しました");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
