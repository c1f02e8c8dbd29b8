//! Frame sources for offline drivers.

use std::path::{Path, PathBuf};

use crate::detect::{load_frame, DetectError};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// One decoded frame and where it came from.
#[derive(Clone, Debug)]
pub struct SourceFrame {
    pub index: usize,
    pub path: PathBuf,
    pub image: ::image::RgbImage,
}

/// Decodes a fixed list of image files in order, one per `next()` call.
///
/// Directories given to [`ImageSequence::new`] are expanded into their image
/// files, sorted by name.
#[derive(Debug)]
pub struct ImageSequence {
    paths: std::vec::IntoIter<PathBuf>,
    index: usize,
}

impl ImageSequence {
    pub fn new<I, P>(inputs: I) -> std::io::Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut paths = Vec::new();
        for input in inputs {
            let input = input.as_ref();
            if input.is_dir() {
                paths.extend(list_images(input)?);
            } else {
                paths.push(input.to_path_buf());
            }
        }
        Ok(Self {
            paths: paths.into_iter(),
            index: 0,
        })
    }

    /// Frames not yet read.
    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl Iterator for ImageSequence {
    type Item = Result<SourceFrame, DetectError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        let index = self.index;
        self.index += 1;
        Some(load_frame(&path).map(|image| SourceFrame { index, path, image }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.paths.size_hint()
    }
}

fn list_images(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if path.is_file() && is_image {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}
