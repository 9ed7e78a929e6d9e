use std::io::Cursor;
use std::path::{Component, Path, PathBuf};
use std::{fs, io};

use derive_more::Display;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{imageops, DynamicImage, GenericImageView, ImageFormat, ImageReader, Rgba, RgbaImage};
use infer::Infer;
use uuid::Uuid;

/// Request bodies above this are rejected before any processing.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];
const THUMBNAIL_SIZE: u32 = 300;
const THUMBNAIL_QUALITY: u8 = 85;
const THUMBNAIL_DIR: &str = "thumbnails";
const PUBLIC_PREFIX: &str = "uploads";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Profile,
    Projects,
    Certifications,
}

impl ImageCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "profile" => Some(ImageCategory::Profile),
            "projects" => Some(ImageCategory::Projects),
            "certifications" => Some(ImageCategory::Certifications),
            _ => None,
        }
    }

    fn as_dir(&self) -> &'static str {
        match self {
            ImageCategory::Profile => "profile",
            ImageCategory::Projects => "projects",
            ImageCategory::Certifications => "certifications",
        }
    }
}

/// Paths handed back to callers, relative to the public `uploads/` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub path: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Display)]
pub enum UploadError {
    #[display("File extension not allowed. Accepted: png, jpg, jpeg, gif, webp.")]
    InvalidExtension,

    #[display("File exceeds the {MAX_UPLOAD_BYTES} byte upload limit.")]
    TooLarge,

    #[display("File is not a valid image: {_0}")]
    InvalidContent(String),

    #[display("Failed to store file: {_0}")]
    Io(io::Error),
}

/// Validates, names, and stores uploaded images plus their thumbnails.
///
/// Originals live under `<root>/<category>/`, thumbnails under
/// `<root>/thumbnails/thumb_<name>.jpg`. All returned and accepted path
/// strings carry the public `uploads/` prefix.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MediaStore { root: root.into() }
    }

    /// True for paths this store manages, as opposed to external URLs.
    pub fn is_managed(path: &str) -> bool {
        path.starts_with(&format!("{}/", PUBLIC_PREFIX))
    }

    /// Validates `bytes` as a genuine image and writes it under `category`
    /// with a collision-free generated name. The stored extension comes
    /// from the decoded format, not the client filename, so a mislabeled
    /// upload can never persist with a lying extension.
    ///
    /// Thumbnail derivation is best-effort: on failure the original still
    /// stands and `thumbnail` is `None`. Nothing is left on disk when an
    /// error is returned.
    pub fn store_image(
        &self,
        bytes: &[u8],
        original_name: &str,
        category: ImageCategory,
    ) -> Result<StoredImage, UploadError> {
        let ext = extension_of(original_name).ok_or(UploadError::InvalidExtension)?;
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(UploadError::InvalidExtension);
        }

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }

        // Sniff in tolerant mode: an unrecognized stream falls through to
        // the decoder, a recognized non-image is rejected outright.
        let infer = Infer::new();
        if let Some(kind) = infer.get(bytes) {
            if !kind.mime_type().starts_with("image/") {
                return Err(UploadError::InvalidContent(format!(
                    "detected type {}", kind.mime_type()
                )));
            }
        }

        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| UploadError::InvalidContent(e.to_string()))?;
        let format = reader
            .format()
            .ok_or_else(|| UploadError::InvalidContent("unrecognized image format".into()))?;
        let stored_ext = normalized_extension(format)
            .ok_or_else(|| UploadError::InvalidContent(format!("unsupported format {:?}", format)))?;
        let img = reader
            .decode()
            .map_err(|e| UploadError::InvalidContent(e.to_string()))?;

        let name = Uuid::new_v4().simple().to_string();
        let file_name = format!("{}.{}", name, stored_ext);

        let category_dir = self.root.join(category.as_dir());
        fs::create_dir_all(&category_dir).map_err(UploadError::Io)?;

        let original_path = category_dir.join(&file_name);
        if let Err(e) = fs::write(&original_path, bytes) {
            // A truncated original must not survive a failed write.
            let _ = fs::remove_file(&original_path);
            return Err(UploadError::Io(e));
        }

        let thumbnail = match self.write_thumbnail(&img, &name) {
            Ok(public) => Some(public),
            Err(e) => {
                tracing::warn!("Thumbnail generation failed for {}: {}", file_name, e);
                None
            }
        };

        Ok(StoredImage {
            path: format!("{}/{}/{}", PUBLIC_PREFIX, category.as_dir(), file_name),
            thumbnail,
        })
    }

    fn write_thumbnail(&self, img: &DynamicImage, name: &str) -> Result<String, String> {
        let jpeg = render_thumbnail(img).map_err(|e| e.to_string())?;

        let thumb_dir = self.root.join(THUMBNAIL_DIR);
        fs::create_dir_all(&thumb_dir).map_err(|e| e.to_string())?;

        let thumb_name = format!("thumb_{}.jpg", name);
        let thumb_path = thumb_dir.join(&thumb_name);
        if let Err(e) = fs::write(&thumb_path, jpeg) {
            let _ = fs::remove_file(&thumb_path);
            return Err(e.to_string());
        }

        Ok(format!("{}/{}/{}", PUBLIC_PREFIX, THUMBNAIL_DIR, thumb_name))
    }

    /// Best-effort removal of a stored original and its thumbnail.
    /// Missing files and unmanaged paths are ignored; other filesystem
    /// errors are logged and swallowed.
    pub fn delete_image(&self, public_path: &str) {
        if public_path.is_empty() {
            return;
        }

        let Some(original) = self.resolve(public_path) else {
            tracing::debug!("Ignoring delete of unmanaged path: {}", public_path);
            return;
        };

        remove_quietly(&original);

        if let Some(stem) = original.file_stem().and_then(|s| s.to_str()) {
            let thumb = self
                .root
                .join(THUMBNAIL_DIR)
                .join(format!("thumb_{}.jpg", stem));
            remove_quietly(&thumb);
        }
    }

    /// Maps a public `uploads/...` path back into the store, refusing
    /// anything that would escape the root.
    fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        let rel = public_path.strip_prefix(&format!("{}/", PUBLIC_PREFIX))?;
        let rel = Path::new(rel);
        if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.root.join(rel))
    }
}

fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::error!("Failed to delete {}: {}", path.display(), e),
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

// "jpeg" normalizes to ".jpg"; anything outside the allow-list is refused
// even when the decoder understands it.
fn normalized_extension(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("png"),
        ImageFormat::Jpeg => Some("jpg"),
        ImageFormat::Gif => Some("gif"),
        ImageFormat::WebP => Some("webp"),
        _ => None,
    }
}

/// Fixed-size preview: scaled to fit, centered on a white canvas so the
/// output is always exactly 300x300 with transparency flattened to white.
fn render_thumbnail(img: &DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let resized = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    let mut canvas =
        RgbaImage::from_pixel(THUMBNAIL_SIZE, THUMBNAIL_SIZE, Rgba([255, 255, 255, 255]));
    let x = i64::from((THUMBNAIL_SIZE - resized.width()) / 2);
    let y = i64::from((THUMBNAIL_SIZE - resized.height()) / 2);
    imageops::overlay(&mut canvas, &resized.to_rgba8(), x, y);

    let flattened = DynamicImage::ImageRgba8(canvas).to_rgb8();

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, THUMBNAIL_QUALITY);
    flattened.write_with_encoder(encoder)?;
    Ok(out)
}
