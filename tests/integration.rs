// SPDX-License-Identifier: MPL-2.0
use ninart::app::config::{self, Config, PaymentField, PresentationOverride};
use ninart::application::contact::{contact_link, ContactSettings};
use ninart::application::port::CatalogProvider;
use ninart::application::query::{artwork_cards, Page};
use ninart::domain::catalog::{CatalogFilter, StatusFilter};
use ninart::domain::viewer::{PageScroll, Presentation, RenderedSize, ViewerHost};
use ninart::i18n::fluent::I18n;
use ninart::infrastructure::StaticCatalog;
use tempfile::tempdir;

#[tokio::test]
async fn shop_card_opens_viewer_with_nested_photo_paths() {
    let catalog = StaticCatalog::embedded()
        .fetch()
        .await
        .expect("embedded catalog parses");
    let page = Page::Shop;
    let cards = artwork_cards(&catalog, &page, &CatalogFilter::default());
    let card = cards
        .iter()
        .find(|card| card.artwork_id == "nini_01")
        .expect("nini_01 is listed in the shop");

    let mut scroll = PageScroll::Enabled;
    let mut host = ViewerHost::new(Presentation::Desktop);
    host.open(card.item.clone(), page.depth(), &mut scroll);
    assert_eq!(scroll, PageScroll::Locked);

    let session = host.session().expect("viewer is open");
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_photo(), "../images/naturmort6.jpg");
    assert_eq!(session.photos().len(), 9);

    host.previous();
    assert_eq!(host.session().map(|s| s.current_index()), Some(8));
    host.next();
    host.next();
    assert_eq!(host.session().map(|s| s.current_index()), Some(1));

    host.close(&mut scroll);
    assert!(!host.is_open());
    assert_eq!(scroll, PageScroll::Enabled);
}

#[tokio::test]
async fn mobile_session_swipes_and_pans_within_bounds() {
    let catalog = StaticCatalog::embedded()
        .fetch()
        .await
        .expect("embedded catalog parses");
    let cards = artwork_cards(&catalog, &Page::Gallery, &CatalogFilter::default());
    let card = cards
        .iter()
        .find(|card| card.artwork_id == "nini_02")
        .expect("nini_02 is in the gallery");

    let mut scroll = PageScroll::Enabled;
    let mut host = ViewerHost::new(Presentation::Mobile);
    host.open(card.item.clone(), Page::Gallery.depth(), &mut scroll);

    host.swipe(-49.0);
    assert_eq!(host.session().map(|s| s.current_index()), Some(0));
    host.swipe(-51.0);
    assert_eq!(host.session().map(|s| s.current_index()), Some(1));

    let rendered = RenderedSize::new(400.0, 600.0);
    host.toggle_zoom();
    host.pan(1_000.0, -1_000.0, rendered);
    let pan = host.session().map(|s| s.pan_offset()).expect("open session");
    assert_eq!((pan.x, pan.y), (200.0, -300.0));

    host.next();
    let session = host.session().expect("open session");
    assert!(!session.is_zoomed());
    assert_eq!((session.pan_offset().x, session.pan_offset().y), (0.0, 0.0));
}

#[tokio::test]
async fn sold_filter_only_lists_sold_artworks() {
    let catalog = StaticCatalog::embedded()
        .fetch()
        .await
        .expect("embedded catalog parses");
    let filter = CatalogFilter {
        status: StatusFilter::Sold,
        ..CatalogFilter::default()
    };
    for card in artwork_cards(&catalog, &Page::Gallery, &filter) {
        assert!(card.item.status.is_sold(), "{} should be sold", card.artwork_id);
    }
}

#[tokio::test]
async fn contact_link_targets_the_artist() {
    let catalog = StaticCatalog::embedded()
        .fetch()
        .await
        .expect("embedded catalog parses");
    let cards = artwork_cards(&catalog, &Page::Gallery, &CatalogFilter::default());
    let card = cards
        .iter()
        .find(|card| card.artwork_id == "nini_01")
        .expect("nini_01 is in the gallery");

    let i18n = I18n::new(Some("ka".to_string()), &Config::default());
    let settings = ContactSettings {
        default_number: "995000000000".to_string(),
        currency: "₾".to_string(),
    };
    let link = contact_link(&i18n, &card.item, &settings);
    assert!(link.starts_with("https://wa.me/995579388833?text="));
    assert!(link.contains("%E2%82%BE250"));
}

#[test]
fn config_round_trip_keeps_gallery_sections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("ka".to_string());
    cfg.viewer.presentation = PresentationOverride::Mobile;
    cfg.contact.currency = Some("$".to_string());
    cfg.payment.fields = vec![PaymentField {
        label: "IBAN".to_string(),
        value: "GE00TB0000000000000000".to_string(),
    }];
    config::save_to_path(&cfg, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, cfg);

    let i18n = I18n::new(None, &loaded);
    assert!(i18n.is_georgian());
}
