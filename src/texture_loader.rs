use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};

use crate::error::{PortfolioError, Result};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Rotation needed to display an image upright, from its EXIF orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,       // 180 deg
    Clockwise,  // 90 deg clockwise
    CounterClockwise,
}

impl Rotation {
    /// 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    /// Orientations involving flips are displayed as is.
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_image_path(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Image files in `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| PortfolioError::Io { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(PortfolioError::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal: show the image unrotated
            tracing::warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

/// Loads an image, applies its EXIF rotation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let image_err = |reason: String| PortfolioError::Image {
        path: image_path.to_path_buf(),
        reason,
    };

    let file_bytes = fs::read(image_path).map_err(|source| PortfolioError::Io {
        path: image_path.to_path_buf(),
        source,
    })?;

    // EXIF is only reliable for JPEG
    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| image_err(e.to_string()))?;

    let rotation = Rotation::from_orientation(orientation);
    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        tracing::debug!(path = %image_path.display(), ?rotation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| image_err(e.to_string()))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_maps_to_rotation() {
        assert_eq!(Rotation::from_orientation(1), Rotation::None);
        assert_eq!(Rotation::from_orientation(3), Rotation::Half);
        assert_eq!(Rotation::from_orientation(6), Rotation::Clockwise);
        assert_eq!(Rotation::from_orientation(8), Rotation::CounterClockwise);
        assert_eq!(Rotation::from_orientation(2), Rotation::None);
    }

    #[test]
    fn image_paths_are_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("d.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.gif"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"hi").unwrap();
        assert!(matches!(
            load_sorted_image_paths(dir.path()),
            Err(PortfolioError::NoImages(_))
        ));
    }
}
