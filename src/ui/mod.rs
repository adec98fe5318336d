// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages and overlays
//!
//! - [`gallery`] - Catalog pages: home, artists, artist shop, shop, gallery, search
//! - [`viewer`] - Product viewer: desktop modal and fullscreen mobile overlay
//! - [`payment`] - Payment details panel with copy buttons
//! - [`navbar`] - Header with page links, search and language switch
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (copy button)
//! - [`widgets`] - Custom Iced widgets (page scroll lock)
//! - [`modal`] - Backdrop shared by the overlays
//! - [`photo`] - Photo widgets for local and downloaded images
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod payment;
pub mod photo;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
