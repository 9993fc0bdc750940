//! 料理カタログ（`dishes.json`）

use super::{document, DecodePolicy};
use crate::error::Result;
use calorie_counter_common::DishTemplate;
use std::path::{Path, PathBuf};

/// `upsert` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// 新規追加
    Inserted,
    /// 同名（大文字小文字無視）の料理を置き換えた
    Replaced,
}

#[derive(Debug, Clone)]
pub struct DishCatalog {
    path: PathBuf,
    policy: DecodePolicy,
}

impl DishCatalog {
    pub const FILE_NAME: &'static str = "dishes.json";

    pub fn new(data_dir: &Path, policy: DecodePolicy) -> Self {
        Self {
            path: data_dir.join(Self::FILE_NAME),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 全件読み込み（ファイルが無ければ空）
    pub fn load_all(&self) -> Result<Vec<DishTemplate>> {
        document::read_array(&self.path, self.policy)
    }

    /// 料理名で検索（大文字小文字無視、最初の一致）
    pub fn find_by_name(&self, name: &str) -> Result<Option<DishTemplate>> {
        let dishes = self.load_all()?;
        Ok(dishes.into_iter().find(|d| d.matches(name)))
    }

    /// 同名があれば同じ位置で置き換え、無ければ末尾に追加
    pub fn upsert(&self, template: DishTemplate) -> Result<Upsert> {
        let mut dishes = self.load_all()?;

        let outcome = match dishes.iter().position(|d| d.matches(&template.name)) {
            Some(i) => {
                dishes[i] = template;
                Upsert::Replaced
            }
            None => {
                dishes.push(template);
                Upsert::Inserted
            }
        };

        document::write_array(&self.path, &dishes)?;
        tracing::debug!(?outcome, count = dishes.len(), "料理カタログを更新しました");
        Ok(outcome)
    }
}
