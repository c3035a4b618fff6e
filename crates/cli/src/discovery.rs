use crate::error::Error;
use rotation::domain::Image;
use std::path::Path;
use tracing::{debug, warn};

const EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "bmp", "gif", "webp", "tif", "tiff"];

/// Whether the path looks like an image we can hand out.
pub fn is_wallpaper(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// Expand the glob patterns into the list of wallpapers, sorted by path.
///
/// Unreadable entries are skipped with a warning; only a malformed pattern
/// fails.
pub fn discover<T: AsRef<str>>(patterns: &[T]) -> Result<Vec<Image>, Error> {
    let mut images = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        for entry in glob::glob(pattern)? {
            match entry {
                Ok(path) if is_wallpaper(&path) => images.push(Image::new(path)),
                Ok(path) => debug!(?path, "not a wallpaper"),
                Err(err) => warn!(%err, "skipping unreadable entry"),
            }
        }
    }

    images.sort_by(|a, b| a.key().cmp(b.key()));
    images.dedup();
    debug!(count = images.len(), "wallpapers discovered");
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn keeps_images_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.webp"] {
            File::create(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.jpg")).unwrap();

        let pattern = format!("{}/*", dir.path().display());
        let images = discover(&[pattern.clone(), pattern]).unwrap();

        let names: Vec<_> = images
            .iter()
            .map(|image| image.key().path().file_name().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn malformed_pattern_fails() {
        assert!(matches!(discover(&["/walls/[*.jpg"]), Err(Error::Pattern(_))));
    }
}
