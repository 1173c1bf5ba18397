use rand::Rng;

use crate::config::SiteConfig;
use crate::image_pool::{random_image_url, ImageSize, PoolKind};
use crate::page::{background_image_value, PageDom};

pub const HERO_SELECTOR: &str = ".hero";
pub const GALLERY_IMAGE_SELECTOR: &str = ".gallery-image";
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";
pub const GALLERY_CAPTION_SELECTOR: &str = ".gallery-overlay h3";
pub const FURNITURE_CARD_SELECTOR: &str = ".furniture-card";

const KITCHEN_KEYWORD: &str = "kitchen";

/// Whether a gallery caption asks for the kitchen pool.
// TODO: key off a data attribute once gallery items carry one instead of caption text.
pub fn caption_selects_kitchen(caption: &str) -> bool {
    caption.to_lowercase().contains(KITCHEN_KEYWORD)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RandomizeReport {
    pub hero: bool,
    pub gallery: usize,
    pub kitchen: usize,
    pub furniture: usize,
}

impl RandomizeReport {
    pub fn total(&self) -> usize {
        usize::from(self.hero) + self.gallery + self.furniture
    }
}

/// Assigns a fresh random background to the hero, every gallery tile and every
/// furniture card. `sig` is the cache-busting stamp shared by this pass.
pub fn randomize_images<D, R>(
    dom: &D,
    config: &SiteConfig,
    rng: &mut R,
    sig: u64,
) -> RandomizeReport
where
    D: PageDom,
    R: Rng,
{
    let mut report = RandomizeReport::default();

    if let Some(hero) = dom.query(HERO_SELECTOR) {
        report.hero = assign(dom, &hero, config, config.hero_size, PoolKind::Interior, rng, sig);
    }

    for image in dom.query_all(GALLERY_IMAGE_SELECTOR) {
        let kind = gallery_pool(dom, &image);
        if assign(dom, &image, config, config.gallery_size, kind, rng, sig) {
            report.gallery += 1;
            if kind == PoolKind::Kitchen {
                report.kitchen += 1;
            }
        }
    }

    for card in dom.query_all(FURNITURE_CARD_SELECTOR) {
        if assign(dom, &card, config, config.furniture_size, PoolKind::Interior, rng, sig) {
            report.furniture += 1;
        }
    }

    report
}

fn gallery_pool<D: PageDom>(dom: &D, image: &D::Node) -> PoolKind {
    let caption = dom
        .closest(image, GALLERY_ITEM_SELECTOR)
        .and_then(|item| dom.query_within(&item, GALLERY_CAPTION_SELECTOR))
        .map(|caption| dom.text(&caption));
    match caption {
        Some(caption) if caption_selects_kitchen(&caption) => PoolKind::Kitchen,
        _ => PoolKind::Interior,
    }
}

fn assign<D: PageDom, R: Rng>(
    dom: &D,
    node: &D::Node,
    config: &SiteConfig,
    size: ImageSize,
    kind: PoolKind,
    rng: &mut R,
    sig: u64,
) -> bool {
    let Some(url) = random_image_url(&config.image_host, &config.pools, size, kind, rng, sig)
    else {
        return false;
    };
    dom.set_style(node, "background-image", &background_image_value(&url));
    true
}
