// SPDX-License-Identifier: MPL-2.0
//! Maps the kitty lifecycle to what ends up on screen.
//!
//! [`view_model`] is a pure function from state to [`KittyView`]; [`render`]
//! turns that description into iced widgets. Tests assert on the former.

use super::component::{Message, Props};
use crate::i18n::fluent::I18n;
use crate::kitty::{scale_to_fit, Dimensions, LifecycleState};
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{image, tooltip, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

pub const ERROR_KEY: &str = "kitty-error";
pub const ALT_KEY: &str = "kitty-alt";
pub const LOADING_ALT_KEY: &str = "kitty-loading-alt";

/// An image element with explicit display size.
#[derive(Debug, Clone)]
pub struct ImageView {
    /// Where the pixels come from: the placeholder path or the fetched URL.
    pub src: String,
    pub alt: String,
    pub size: Dimensions,
    pub handle: image::Handle,
}

/// One of the three things the component can show.
#[derive(Debug, Clone)]
pub enum KittyView {
    Loading(ImageView),
    Error(String),
    Loaded(ImageView),
}

impl KittyView {
    /// The image element, if this view has one.
    #[must_use]
    pub fn image(&self) -> Option<&ImageView> {
        match self {
            Self::Loading(img) | Self::Loaded(img) => Some(img),
            Self::Error(_) => None,
        }
    }

    /// The text shown instead of an image, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Describes the current frame.
#[must_use]
pub fn view_model(
    lifecycle: &LifecycleState,
    props: &Props,
    loading_handle: &image::Handle,
    i18n: &I18n,
) -> KittyView {
    match lifecycle {
        LifecycleState::Loading => KittyView::Loading(ImageView {
            src: props.loading_image.display().to_string(),
            alt: i18n.tr(LOADING_ALT_KEY),
            size: props.max_dimension.as_square(),
            handle: loading_handle.clone(),
        }),
        LifecycleState::Error(_) => KittyView::Error(i18n.tr(ERROR_KEY)),
        LifecycleState::Loaded(kitty) => KittyView::Loaded(ImageView {
            src: kitty.url().to_string(),
            alt: i18n.tr(ALT_KEY),
            size: scale_to_fit(kitty.record().natural_size(), props.max_dimension),
            handle: kitty.handle().clone(),
        }),
    }
}

/// Builds the widget tree for `model`.
pub fn render<'a>(model: KittyView) -> Element<'a, Message> {
    let content: Element<'a, Message> = match model {
        KittyView::Loading(img) | KittyView::Loaded(img) => image_element(img),
        KittyView::Error(message) => Text::new(message)
            .size(typography::BODY_LG)
            .color(palette::ERROR_500)
            .into(),
    };

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn image_element<'a>(img: ImageView) -> Element<'a, Message> {
    let picture = Image::<image::Handle>::new(img.handle)
        .width(Length::Fixed(img.size.width as f32))
        .height(Length::Fixed(img.size.height as f32))
        .content_fit(ContentFit::Fill);

    // iced images carry no alt text; show it on hover instead.
    let alt = Container::new(
        Text::new(img.alt)
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .padding(spacing::XS);

    tooltip(picture, alt, tooltip::Position::Bottom)
        .gap(spacing::XS)
        .into()
}
