mod support;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use showroom_core::{
    random_image_url, randomize_images, ImagePools, ImageSize, PageDom, PoolKind, SiteConfig,
};
use support::{photo_id_from_url, FakePage, NodeId};

fn url_from_background(value: &str) -> &str {
    value
        .strip_prefix("url('")
        .and_then(|rest| rest.strip_suffix("')"))
        .expect("background-image should be url('...')")
}

fn gallery_item(page: &FakePage, caption: &str) -> NodeId {
    let item = page.add(None, "div.gallery-item");
    let image = page.add(Some(item), "div.gallery-image");
    let overlay = page.add(Some(item), "div.gallery-overlay");
    let heading = page.add(Some(overlay), "h3");
    page.set_text(&heading, caption);
    image
}

#[test]
fn random_urls_carry_size_and_pool_ids() {
    let pools = ImagePools::default();
    for seed in 0..200u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        for (kind, size) in [
            (PoolKind::Interior, ImageSize::GALLERY),
            (PoolKind::Kitchen, ImageSize::new(320, 240)),
        ] {
            let url = random_image_url("images.unsplash.com", &pools, size, kind, &mut rng, seed)
                .expect("pools are not empty");
            assert!(url.starts_with("https://images.unsplash.com/photo-"));
            assert!(url.contains(&format!("w={}&h={}", size.width, size.height)));
            assert!(url.ends_with(&format!("&fit=crop&auto=format&sig={seed}")));
            let id = photo_id_from_url(&url).expect("photo id");
            assert!(pools.contains(kind, id), "{id} not in {kind:?} pool");
        }
    }
}

#[test]
fn empty_pools_produce_no_url() {
    let pools = ImagePools::new(Vec::new(), Vec::new());
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        random_image_url(
            "images.unsplash.com",
            &pools,
            ImageSize::HERO,
            PoolKind::Kitchen,
            &mut rng,
            1
        ),
        None
    );
}

#[test]
fn randomizer_assigns_every_target() {
    let page = FakePage::new();
    let hero = page.add(None, "header.hero");
    let kitchen = gallery_item(&page, "Rustic Kitchen");
    let living = gallery_item(&page, "Living Room");
    let loose = page.add(None, "div.gallery-image");
    let card_a = page.add(None, "div.furniture-card");
    let card_b = page.add(None, "div.furniture-card");
    let config = SiteConfig::default();
    let mut rng = SmallRng::seed_from_u64(42);

    let report = randomize_images(&page, &config, &mut rng, 1_700_000_000_000);

    assert!(report.hero);
    assert_eq!(report.gallery, 3);
    assert_eq!(report.kitchen, 1);
    assert_eq!(report.furniture, 2);
    assert_eq!(report.total(), 6);

    let hero_url = page.style(hero, "background-image").expect("hero image");
    assert!(url_from_background(&hero_url).contains("w=1920&h=1080"));

    let kitchen_url = page.style(kitchen, "background-image").expect("kitchen image");
    let kitchen_url = url_from_background(&kitchen_url);
    assert!(kitchen_url.contains("w=800&h=600"));
    let id = photo_id_from_url(kitchen_url).expect("id");
    assert!(config.pools.contains(PoolKind::Kitchen, id));

    for node in [living, loose] {
        let value = page.style(node, "background-image").expect("gallery image");
        let url = url_from_background(&value);
        let id = photo_id_from_url(url).expect("id");
        assert!(config.pools.contains(PoolKind::Interior, id));
    }

    for card in [card_a, card_b] {
        let value = page.style(card, "background-image").expect("card image");
        assert!(url_from_background(&value).contains("w=600&h=400"));
        assert!(value.contains("sig=1700000000000"));
    }
}

#[test]
fn randomizer_on_bare_page_is_a_no_op() {
    let page = FakePage::new();
    page.add(None, "section.about");
    let mut rng = SmallRng::seed_from_u64(1);

    let report = randomize_images(&page, &SiteConfig::default(), &mut rng, 0);

    assert_eq!(report.total(), 0);
    assert!(page.query_all(".hero").is_empty());
}
