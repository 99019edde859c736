//! CLIバイナリ連携
//!
//! 分類はビューア内では行わず、office-ai-rust コマンドに委譲する。

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use office_ai_common::ClassifyReport;

/// office-ai-rust バイナリの場所を解決する
///
/// 自分と同じディレクトリ → target/debug・target/release → PATH の順。
pub fn resolve_cli_binary() -> PathBuf {
    let name = format!("office-ai-rust{}", std::env::consts::EXE_SUFFIX);

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let sibling = dir.join(&name);
            if sibling.is_file() {
                return sibling;
            }
            for profile in ["debug", "release"] {
                let candidate = dir.join("..").join(profile).join(&name);
                if candidate.is_file() {
                    return candidate;
                }
            }
        }
    }

    PathBuf::from(name)
}

/// CLIを起動して1枚の写真を分類する
pub fn classify_via_cli(photo: &Path) -> Result<ClassifyReport> {
    let binary = resolve_cli_binary();
    let output = Command::new(&binary)
        .arg("classify")
        .arg(photo)
        .arg("--format")
        .arg("json")
        .output()
        .with_context(|| format!("CLIの起動に失敗: {}", binary.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("分類コマンドが失敗しました: {}", stderr.trim()));
    }

    let reports: Vec<ClassifyReport> =
        serde_json::from_slice(&output.stdout).context("分類結果のJSON解析に失敗")?;
    reports
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("分類結果が空です"))
}
