use crate::contact::{CONTACT_STORAGE_KEY, EDITABLE_SELECTOR, KEY_ATTRIBUTE};
use crate::form::FormConfig;
use crate::image_pool::{ImagePools, ImageSize, ImageSizeError, DEFAULT_IMAGE_HOST};
use crate::indicator::IndicatorConfig;
use crate::scroll::{NavbarConfig, RevealConfig};

/// Element group whose background size can be overridden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    Hero,
    Gallery,
    Furniture,
}

/// Everything the page behaviors need to know about the markup and the site.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub storage_key: String,
    pub editable_selector: String,
    pub key_attribute: String,
    pub image_host: String,
    pub pools: ImagePools,
    pub hero_size: ImageSize,
    pub gallery_size: ImageSize,
    pub furniture_size: ImageSize,
    pub indicator: IndicatorConfig,
    pub navbar: NavbarConfig,
    pub reveal: RevealConfig,
    pub form: FormConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: CONTACT_STORAGE_KEY.to_string(),
            editable_selector: EDITABLE_SELECTOR.to_string(),
            key_attribute: KEY_ATTRIBUTE.to_string(),
            image_host: DEFAULT_IMAGE_HOST.to_string(),
            pools: ImagePools::default(),
            hero_size: ImageSize::HERO,
            gallery_size: ImageSize::GALLERY,
            furniture_size: ImageSize::FURNITURE,
            indicator: IndicatorConfig::default(),
            navbar: NavbarConfig::default(),
            reveal: RevealConfig::default(),
            form: FormConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults with build-time overrides from `SHOWROOM_IMAGE_HOST`,
    /// `SHOWROOM_STORAGE_KEY` and `SHOWROOM_{HERO,GALLERY,FURNITURE}_SIZE` (also accepted
    /// with trunk's `TRUNK_PUBLIC_` prefix). Size overrides that fail to parse are
    /// returned alongside the config, which keeps the default for that slot.
    pub fn from_build_env() -> (Self, Vec<ImageSizeError>) {
        let mut config = Self::default().with_overrides(
            option_env!("SHOWROOM_IMAGE_HOST").or(option_env!("TRUNK_PUBLIC_SHOWROOM_IMAGE_HOST")),
            option_env!("SHOWROOM_STORAGE_KEY")
                .or(option_env!("TRUNK_PUBLIC_SHOWROOM_STORAGE_KEY")),
        );
        let sizes = [
            (
                ImageSlot::Hero,
                option_env!("SHOWROOM_HERO_SIZE")
                    .or(option_env!("TRUNK_PUBLIC_SHOWROOM_HERO_SIZE")),
            ),
            (
                ImageSlot::Gallery,
                option_env!("SHOWROOM_GALLERY_SIZE")
                    .or(option_env!("TRUNK_PUBLIC_SHOWROOM_GALLERY_SIZE")),
            ),
            (
                ImageSlot::Furniture,
                option_env!("SHOWROOM_FURNITURE_SIZE")
                    .or(option_env!("TRUNK_PUBLIC_SHOWROOM_FURNITURE_SIZE")),
            ),
        ];
        let errors = sizes
            .into_iter()
            .filter_map(|(slot, raw)| config.override_size(slot, raw).err())
            .collect();
        (config, errors)
    }

    pub fn with_overrides(mut self, image_host: Option<&str>, storage_key: Option<&str>) -> Self {
        if let Some(host) = non_empty(image_host) {
            self.image_host = normalize_host(host);
        }
        if let Some(key) = non_empty(storage_key) {
            self.storage_key = key.to_string();
        }
        self
    }

    /// Replaces the size for `slot` with `raw` parsed as `<width>x<height>`. Blank input
    /// is ignored; on a parse error the current size stays.
    pub fn override_size(
        &mut self,
        slot: ImageSlot,
        raw: Option<&str>,
    ) -> Result<(), ImageSizeError> {
        let Some(raw) = non_empty(raw) else {
            return Ok(());
        };
        let size = ImageSize::parse(raw)?;
        match slot {
            ImageSlot::Hero => self.hero_size = size,
            ImageSlot::Gallery => self.gallery_size = size,
            ImageSlot::Furniture => self.furniture_size = size,
        }
        Ok(())
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn normalize_host(raw: &str) -> String {
    let host = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw);
    host.trim_end_matches('/').to_string()
}
