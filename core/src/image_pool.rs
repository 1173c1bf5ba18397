use std::fmt;

use rand::Rng;

pub const DEFAULT_IMAGE_HOST: &str = "images.unsplash.com";

/// General interior shots grouped by room type. Ids repeat across groups on purpose;
/// the repeats weight the draw toward the strongest photos.
pub const INTERIOR_IMAGES: &[&str] = &[
    // living rooms
    "1586023492125-27b2c045efd7",
    "1583847268969-b35d41d2e061",
    "1560448204-e02f841c09f5",
    "1506439773649-6e0eb8cfb237",
    "1560184897-ae9c0b3b8c0e",
    "1556911220-bff31c812dba",
    // bedrooms
    "1631889993951-12f2a97e2c0a",
    "1522771739844-6a9f6d5b377b",
    "1556912172-45b7abe8b7e1",
    "1560448204-e02f841c09f5",
    "1583847268969-b35d41d2e061",
    "1506439773649-6e0eb8cfb237",
    // kitchens
    "1556912172-45b7abe8b7e1",
    "1556911220-bff31c812dba",
    "1556911220-e15b29be8c8f",
    "1556909114-f6e7ad7d3136",
    "1556912173-6719e5279ce6",
    "1556912171-4c0c4e0e4b0a",
    "1556912173-2b45e6d44d66",
    "1560184897-ae9c0b3b8c0e",
    "1586023492125-27b2c045efd7",
    "1506439773649-6e0eb8cfb237",
    "1631889993951-12f2a97e2c0a",
    "1556909114-366b1f3e0e5f",
    // offices
    "1497366216548-37526070297c",
    "1506439773649-6e0eb8cfb237",
    "1560184897-ae9c0b3b8c0e",
    "1586023492125-27b2c045efd7",
    "1556911220-bff31c812dba",
    "1631889993951-12f2a97e2c0a",
    // dining rooms
    "1556911220-bff31c812dba",
    "1586023492125-27b2c045efd7",
    "1506439773649-6e0eb8cfb237",
    "1560184897-ae9c0b3b8c0e",
    "1556912172-45b7abe8b7e1",
    "1631889993951-12f2a97e2c0a",
    // study rooms
    "1506439773649-6e0eb8cfb237",
    "1497366216548-37526070297c",
    "1560184897-ae9c0b3b8c0e",
    "1586023492125-27b2c045efd7",
    "1556911220-bff31c812dba",
    "1631889993951-12f2a97e2c0a",
];

pub const KITCHEN_IMAGES: &[&str] = &[
    "1556912172-45b7abe8b7e1",
    "1556911220-e15b29be8c8f",
    "1556909114-f6e7ad7d3136",
    "1556912173-6719e5279ce6",
    "1556912171-4c0c4e0e4b0a",
    "1556912173-2b45e6d44d66",
    "1556909114-366b1f3e0e5f",
    "1556911220-bff31c812dba",
    "1556912172-45b7abe8b7e1",
    "1556911220-e15b29be8c8f",
    "1556909114-f6e7ad7d3136",
    "1556912173-6719e5279ce6",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const HERO: ImageSize = ImageSize::new(1920, 1080);
    pub const GALLERY: ImageSize = ImageSize::new(800, 600);
    pub const FURNITURE: ImageSize = ImageSize::new(600, 400);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parses the `<width>x<height>` form, e.g. `800x600`.
    pub fn parse(value: &str) -> Result<Self, ImageSizeError> {
        let value = value.trim();
        let Some((width, height)) = value.split_once(['x', 'X']) else {
            return Err(ImageSizeError::MissingSeparator {
                value: value.to_string(),
            });
        };
        let width = parse_dimension(width)?;
        let height = parse_dimension(height)?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn parse_dimension(raw: &str) -> Result<u32, ImageSizeError> {
    let raw = raw.trim();
    let value = raw
        .parse::<u32>()
        .map_err(|_| ImageSizeError::InvalidDimension {
            value: raw.to_string(),
        })?;
    if value == 0 {
        return Err(ImageSizeError::ZeroDimension);
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSizeError {
    MissingSeparator { value: String },
    InvalidDimension { value: String },
    ZeroDimension,
}

impl fmt::Display for ImageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSizeError::MissingSeparator { value } => {
                write!(f, "image size '{value}' must look like <width>x<height>")
            }
            ImageSizeError::InvalidDimension { value } => {
                write!(f, "invalid image dimension '{value}'")
            }
            ImageSizeError::ZeroDimension => write!(f, "image dimensions must be non-zero"),
        }
    }
}

impl std::error::Error for ImageSizeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Interior,
    Kitchen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePools {
    interior: Vec<String>,
    kitchen: Vec<String>,
}

impl ImagePools {
    pub fn new(interior: Vec<String>, kitchen: Vec<String>) -> Self {
        Self { interior, kitchen }
    }

    /// Ids for `kind`. An empty kitchen pool falls back to the interior pool.
    pub fn pool(&self, kind: PoolKind) -> &[String] {
        match kind {
            PoolKind::Kitchen if !self.kitchen.is_empty() => &self.kitchen,
            _ => &self.interior,
        }
    }

    pub fn contains(&self, kind: PoolKind, photo_id: &str) -> bool {
        self.pool(kind).iter().any(|id| id == photo_id)
    }

    pub fn pick<R: Rng>(&self, kind: PoolKind, rng: &mut R) -> Option<&str> {
        let pool = self.pool(kind);
        if pool.is_empty() {
            return None;
        }
        let index = rng.random_range(0..pool.len());
        pool.get(index).map(String::as_str)
    }
}

impl Default for ImagePools {
    fn default() -> Self {
        Self {
            interior: INTERIOR_IMAGES.iter().map(|id| id.to_string()).collect(),
            kitchen: KITCHEN_IMAGES.iter().map(|id| id.to_string()).collect(),
        }
    }
}

pub fn image_url(host: &str, photo_id: &str, size: ImageSize, sig: u64) -> String {
    let host = host.trim().trim_end_matches('/');
    format!(
        "https://{host}/photo-{photo_id}?w={}&h={}&fit=crop&auto=format&sig={sig}",
        size.width, size.height
    )
}

/// Picks a photo from the selected pool and builds its URL. `sig` is the cache-busting
/// token, normally the current time in milliseconds.
pub fn random_image_url<R: Rng>(
    host: &str,
    pools: &ImagePools,
    size: ImageSize,
    kind: PoolKind,
    rng: &mut R,
    sig: u64,
) -> Option<String> {
    let photo_id = pools.pick(kind, rng)?;
    Some(image_url(host, photo_id, size, sig))
}
