// SPDX-License-Identifier: MPL-2.0
//! Catalog pages: home, artists, artist shop, shop, gallery and search
//! results. Pressing an artwork card asks the application to open the
//! viewer; buttons nested in a card emit their own message instead.

use crate::application::query::{artist_page, artwork_cards, home_artists, Card, Page};
use crate::domain::catalog::{
    search, Artist, ArtistFilter, BioLanguage, Catalog, CatalogFilter, StatusFilter,
};
use crate::domain::viewer::{format_price, is_remote, resolve_reference, Item, PageScroll};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::photo::PhotoContext;
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::scroll_lock;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render a page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub page: &'a Page,
    pub query: &'a str,
    pub photos: PhotoContext<'a>,
    pub currency: &'a str,
    pub scroll: PageScroll,
    /// The catalog fetch has not answered yet.
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenArtwork(String),
    OpenArtist(String),
    Navigate(Page),
    StatusFilter(StatusFilter),
    ArtistFilter(ArtistFilter),
    ArtistPage(usize),
    BioLanguage(BioLanguage),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenArtwork(String),
    Navigate(Page),
}

/// Filters and page positions kept across navigation.
#[derive(Debug, Clone, Default)]
pub struct State {
    filter: CatalogFilter,
    artist_page: usize,
    /// Biography language picked on an artist page; follows the interface
    /// language until the user picks one.
    bio_language: Option<BioLanguage>,
}

impl State {
    #[must_use]
    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    #[must_use]
    pub fn artist_page(&self) -> usize {
        self.artist_page
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::OpenArtwork(id) => Event::OpenArtwork(id),
            Message::OpenArtist(id) => {
                self.bio_language = None;
                Event::Navigate(Page::ArtistShop(id))
            }
            Message::Navigate(page) => Event::Navigate(page),
            Message::StatusFilter(status) => {
                self.filter.status = status;
                Event::None
            }
            Message::ArtistFilter(artist) => {
                self.filter.artist = artist;
                Event::None
            }
            Message::ArtistPage(index) => {
                self.artist_page = index;
                Event::None
            }
            Message::BioLanguage(language) => {
                self.bio_language = Some(language);
                Event::None
            }
        }
    }

    /// Remote photo URLs shown by `page`, for prefetching.
    #[must_use]
    pub fn remote_photos(&self, catalog: &Catalog, page: &Page, query: &str) -> Vec<String> {
        let depth = page.depth();
        let mut references: Vec<String> = if query.trim().is_empty() {
            let mut refs: Vec<String> = artwork_cards(catalog, page, &self.filter)
                .iter()
                .map(|card| card_image(card).to_string())
                .collect();
            refs.extend(self.page_artists(catalog, page).iter().map(|a| a.avatar.clone()));
            refs
        } else {
            let results = search(catalog, query);
            results
                .artists
                .iter()
                .map(|artist| artist.avatar.clone())
                .chain(results.artworks.iter().map(|artwork| artwork.image.clone()))
                .collect()
        };
        references.retain(|reference| is_remote(reference));
        references
            .iter()
            .map(|reference| resolve_reference(reference, depth))
            .collect()
    }

    fn page_artists<'a>(&self, catalog: &'a Catalog, page: &Page) -> Vec<&'a Artist> {
        match page {
            Page::Home => home_artists(catalog),
            Page::Artists => artist_page(catalog, self.artist_page).artists,
            Page::ArtistShop(id) => find_artist(catalog, id).into_iter().collect(),
            Page::Shop | Page::Gallery => Vec::new(),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let body = if !ctx.query.trim().is_empty() {
            self.search_view(&ctx)
        } else if ctx.loading {
            notice(ctx.i18n.tr("gallery-loading"))
        } else {
            match ctx.page {
                Page::Home => self.home_view(&ctx),
                Page::Artists => self.artists_view(&ctx),
                Page::ArtistShop(id) => self.artist_shop_view(&ctx, id),
                Page::Shop => self.listing_view(&ctx, "shop-title"),
                Page::Gallery => self.listing_view(&ctx, "gallery-title"),
            }
        };

        let page = Scrollable::new(Container::new(body).padding(spacing::LG).width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(scroll_lock(page, ctx.scroll))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(container_styles::page)
            .into()
    }

    fn home_view<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let artists = home_artists(ctx.catalog);
        let cards = artwork_cards(ctx.catalog, ctx.page, &self.filter);

        Column::new()
            .spacing(spacing::LG)
            .push(Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG))
            .push(section_header(
                ctx,
                "home-artists",
                "home-view-all-artists",
                Page::Artists,
            ))
            .push(artist_grid(ctx, &artists))
            .push(section_header(ctx, "home-shop", "home-view-shop", Page::Shop))
            .push(status_chips(ctx.i18n, self.filter.status))
            .push(card_grid(ctx, cards))
            .into()
    }

    fn artists_view<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let listing = artist_page(ctx.catalog, self.artist_page);
        let mut column = Column::new()
            .spacing(spacing::LG)
            .push(Text::new(ctx.i18n.tr("artists-title")).size(typography::TITLE_LG))
            .push(artist_grid(ctx, &listing.artists));

        if listing.total_pages > 1 {
            let current = (listing.index + 1).to_string();
            let total = listing.total_pages.to_string();
            let pager_button = |glyph: &'static str, target: Option<usize>| {
                let pressable = button(Text::new(glyph).size(typography::BODY_LG))
                    .padding([spacing::XXS, spacing::SM])
                    .style(button_styles::chip(false));
                match target {
                    Some(index) => pressable.on_press(Message::ArtistPage(index)),
                    None => pressable,
                }
            };
            column = column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(pager_button("‹", listing.index.checked_sub(1)))
                    .push(Text::new(ctx.i18n.tr_with_args(
                        "artists-page",
                        &[("current", current.as_str()), ("total", total.as_str())],
                    )))
                    .push(pager_button(
                        "›",
                        Some(listing.index + 1).filter(|next| *next < listing.total_pages),
                    )),
            );
        }

        column.into()
    }

    fn artist_shop_view<'a>(&'a self, ctx: &ViewContext<'a>, id: &str) -> Element<'a, Message> {
        let Some(artist) = find_artist(ctx.catalog, id) else {
            log::debug!("no artist matches {:?}", id);
            return notice(ctx.i18n.tr("artist-not-found"));
        };

        let language = self.bio_language.unwrap_or(if ctx.i18n.is_georgian() {
            BioLanguage::Georgian
        } else {
            BioLanguage::English
        });
        let biography = artist
            .biography(language)
            .map_or_else(|| ctx.i18n.tr("artist-no-biography"), str::to_string);

        let language_chip = |label: &'static str, lang: BioLanguage| {
            button(Text::new(label).size(typography::CAPTION))
                .on_press(Message::BioLanguage(lang))
                .padding([spacing::XXS, spacing::SM])
                .style(button_styles::chip(language == lang))
        };

        let avatar_source = ctx.photos.locate(
            &resolve_reference(&artist.avatar, ctx.page.depth()),
            ctx.page.directory(),
        );

        let mut about = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(Text::new(artist.name.as_str()).size(typography::TITLE_LG));
        if let Some(country) = artist.country.as_deref() {
            about = about.push(Text::new(country).size(typography::CAPTION));
        }
        about = about
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(language_chip("EN", BioLanguage::English))
                    .push(language_chip("KA", BioLanguage::Georgian)),
            )
            .push(Text::new(biography).size(typography::BODY));

        let header = Row::new()
            .spacing(spacing::LG)
            .push(ctx.photos.view(
                &avatar_source,
                Length::Fixed(sizing::AVATAR),
                Length::Fixed(sizing::AVATAR),
                ContentFit::Cover,
            ))
            .push(about);

        let cards = artwork_cards(ctx.catalog, ctx.page, &self.filter);

        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(status_chips(ctx.i18n, self.filter.status))
            .push(card_grid(ctx, cards))
            .into()
    }

    fn listing_view<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        title_key: &str,
    ) -> Element<'a, Message> {
        let cards = artwork_cards(ctx.catalog, ctx.page, &self.filter);
        Column::new()
            .spacing(spacing::LG)
            .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_LG))
            .push(status_chips(ctx.i18n, self.filter.status))
            .push(artist_filter_chips(ctx, &self.filter.artist))
            .push(card_grid(ctx, cards))
            .into()
    }

    fn search_view<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let results = search(ctx.catalog, ctx.query);
        if results.is_empty() {
            return notice(ctx.i18n.tr_with_args("search-no-results", &[("query", ctx.query)]));
        }

        let cards: Vec<Card> = results
            .artworks
            .iter()
            .map(|artwork| Card {
                artwork_id: artwork.id.clone(),
                item: Item::from_artwork(artwork, ctx.catalog),
            })
            .collect();

        let mut column = Column::new().spacing(spacing::LG);
        if !results.artists.is_empty() {
            column = column
                .push(Text::new(ctx.i18n.tr("search-artists")).size(typography::TITLE_MD))
                .push(artist_grid(ctx, &results.artists));
        }
        if !cards.is_empty() {
            column = column
                .push(Text::new(ctx.i18n.tr("search-artworks")).size(typography::TITLE_MD))
                .push(card_grid(ctx, cards));
        }
        column.into()
    }
}

/// Artist lookup by id, then by slug.
fn find_artist<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Artist> {
    catalog.artist(id).or_else(|| catalog.artist_by_slug(id))
}

/// Image shown on a card: the primary image, else the first photo.
fn card_image(card: &Card) -> &str {
    if card.item.primary_image.is_empty() {
        card.item.photos.first().map_or("", String::as_str)
    } else {
        &card.item.primary_image
    }
}

fn notice<'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn section_header<'a>(
    ctx: &ViewContext<'a>,
    title_key: &str,
    link_key: &str,
    target: Page,
) -> Element<'a, Message> {
    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr(link_key)).size(typography::BODY))
                .on_press(Message::Navigate(target))
                .padding([spacing::XXS, spacing::SM])
                .style(button_styles::chip(false)),
        )
        .into()
}

fn status_chips<'a>(i18n: &I18n, current: StatusFilter) -> Element<'a, Message> {
    [
        ("filter-all", StatusFilter::All),
        ("filter-for-sale", StatusFilter::ForSale),
        ("filter-sold", StatusFilter::Sold),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (key, status)| {
        row.push(
            button(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .on_press(Message::StatusFilter(status))
                .padding([spacing::XXS, spacing::SM])
                .style(button_styles::chip(current == status)),
        )
    })
    .into()
}

fn artist_filter_chips<'a>(ctx: &ViewContext<'a>, current: &ArtistFilter) -> Element<'a, Message> {
    let all = button(Text::new(ctx.i18n.tr("filter-all-artists")).size(typography::CAPTION))
        .on_press(Message::ArtistFilter(ArtistFilter::All))
        .padding([spacing::XXS, spacing::SM])
        .style(button_styles::chip(*current == ArtistFilter::All));

    ctx.catalog
        .listed_artists()
        .fold(Row::new().spacing(spacing::XS).push(all), |row, artist| {
            let filter = ArtistFilter::Only(artist.id.clone());
            let active = *current == filter;
            row.push(
                button(Text::new(artist.name.as_str()).size(typography::CAPTION))
                    .on_press(Message::ArtistFilter(filter))
                    .padding([spacing::XXS, spacing::SM])
                    .style(button_styles::chip(active)),
            )
        })
        .wrap()
        .into()
}

fn artist_grid<'a>(ctx: &ViewContext<'a>, artists: &[&'a Artist]) -> Element<'a, Message> {
    if artists.is_empty() {
        return notice(ctx.i18n.tr("artists-empty"));
    }
    let depth = ctx.page.depth();
    let directory = ctx.page.directory();
    artists
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, artist| {
            let source = ctx
                .photos
                .locate(&resolve_reference(&artist.avatar, depth), directory);
            let mut card = Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(ctx.photos.view(
                    &source,
                    Length::Fixed(sizing::AVATAR),
                    Length::Fixed(sizing::AVATAR),
                    ContentFit::Cover,
                ))
                .push(Text::new(artist.name.as_str()).size(typography::TITLE_SM));
            if let Some(style) = artist.style.as_deref() {
                card = card.push(Text::new(style).size(typography::CAPTION));
            }
            row.push(
                button(
                    Container::new(card)
                        .width(Length::Fixed(sizing::CARD_WIDTH))
                        .padding(spacing::SM)
                        .style(container_styles::card),
                )
                .on_press(Message::OpenArtist(artist.id.clone()))
                .padding(0)
                .style(button_styles::card),
            )
        })
        .wrap()
        .vertical_spacing(spacing::LG)
        .into()
}

fn card_grid<'a>(ctx: &ViewContext<'a>, cards: Vec<Card>) -> Element<'a, Message> {
    if cards.is_empty() {
        return notice(ctx.i18n.tr("gallery-empty"));
    }
    cards
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, card| {
            row.push(artwork_card(ctx, card))
        })
        .wrap()
        .vertical_spacing(spacing::LG)
        .into()
}

fn artwork_card<'a>(ctx: &ViewContext<'a>, card: &Card) -> Element<'a, Message> {
    let item = &card.item;
    let source = ctx.photos.locate(
        &resolve_reference(card_image(card), ctx.page.depth()),
        ctx.page.directory(),
    );

    let mut photo = Stack::new().push(ctx.photos.view(
        &source,
        Length::Fixed(sizing::CARD_WIDTH),
        Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
        ContentFit::Cover,
    ));
    if item.status.is_sold() {
        photo = photo.push(
            Container::new(
                Container::new(Text::new(ctx.i18n.tr("artwork-sold")).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(container_styles::sold_badge),
            )
            .padding(spacing::XS),
        );
    }

    let price = format_price(item.price);
    let mut details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(item.title.clone()).size(typography::BODY_LG));
    if !price.is_empty() {
        details = details.push(
            Text::new(format!("{}{}", ctx.currency, price)).size(typography::BODY),
        );
    }
    if let (Some(name), Some(artist_id)) = (&item.seller_name, &item.artist_ref) {
        details = details.push(
            button(Text::new(name.clone()).size(typography::CAPTION))
                .on_press(Message::OpenArtist(artist_id.clone()))
                .padding(0)
                .style(button_styles::card),
        );
    }

    button(
        Container::new(Column::new().spacing(spacing::XS).push(photo).push(details))
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(container_styles::card),
    )
    .on_press(Message::OpenArtwork(card.artwork_id.clone()))
    .padding(0)
    .style(button_styles::card)
    .into()
}
