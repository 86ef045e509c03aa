use crate::error::{PalmError, Result};
use crate::sample::ImageSample;
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// フォルダ直下の画像をサンプルとして列挙（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageSample>> {
    if !folder.is_dir() {
        return Err(PalmError::FolderNotFound(folder.display().to_string()));
    }

    let mut samples = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("walkdir error: {}", err);
                None
            }
        })
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            if is_image_extension(&ext.to_string_lossy()) {
                samples.push(ImageSample::from_path(path)?);
            }
        }
    }

    samples.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(samples)
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

/// 引数のパス群をサンプル列に展開する
///
/// ファイルはそのまま、フォルダは直下の画像を列挙する。
pub fn collect_samples(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageSample>> {
    let mut samples = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let found = scan_folder(path)?;
            if found.is_empty() {
                return Err(PalmError::NoImagesFound(path.display().to_string()));
            }
            samples.extend(found);
        } else {
            samples.push(ImageSample::from_path(path)?);
        }
    }
    Ok(samples)
}
