// SPDX-License-Identifier: MPL-2.0
//! Scale-to-fit rendering.
//!
//! A render takes a decoded source image, the viewport size and a zoom
//! factor, and produces a [`Frame`] resized with Lanczos3 resampling:
//!
//! ```text
//! scale = min(viewport_w / image_w, viewport_h / image_h) * zoom
//! ```
//!
//! Rendering is CPU bound, so [`render_async`] moves it onto tokio's
//! blocking pool. Every request carries an id; callers drop outcomes whose
//! id is not the latest they issued.

use super::image::load_image;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use iced::Size;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, GenericImageView};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Returns the factor that fits `source` inside `viewport`, times `zoom`.
///
/// Degenerate viewports and images are treated as 1 px on that axis.
#[must_use]
pub fn fit_scale(source: (u32, u32), viewport: Size, zoom: f32) -> f32 {
    let viewport_width = viewport.width.max(1.0);
    let viewport_height = viewport.height.max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let (image_width, image_height) = (source.0.max(1) as f32, source.1.max(1) as f32);

    (viewport_width / image_width).min(viewport_height / image_height) * zoom
}

/// Returns the displayed size for `source`, truncated and at least 1x1.
#[must_use]
pub fn fit_size(source: (u32, u32), viewport: Size, zoom: f32) -> (u32, u32) {
    let scale = fit_scale(source, viewport, zoom);

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let scaled = |extent: u32| ((extent as f32 * scale) as u32).max(1);

    (scaled(source.0), scaled(source.1))
}

/// A rendered bitmap ready for display.
#[derive(Debug, Clone)]
pub struct Frame {
    pub handle: Handle,
    /// Displayed width in logical pixels.
    pub width: u32,
    /// Displayed height in logical pixels.
    pub height: u32,
    /// Width of the decoded file.
    pub source_width: u32,
    /// Height of the decoded file.
    pub source_height: u32,
}

/// Resizes `source` to fit `viewport` at `zoom`.
#[must_use]
pub fn render_frame(source: &DynamicImage, viewport: Size, zoom: f32) -> Frame {
    let (source_width, source_height) = source.dimensions();
    let (width, height) = fit_size((source_width, source_height), viewport, zoom);

    let pixels = if (width, height) == (source_width, source_height) {
        source.to_rgba8()
    } else {
        source
            .resize_exact(width, height, FilterType::Lanczos3)
            .to_rgba8()
    };

    Frame {
        handle: Handle::from_rgba(width, height, pixels.into_vec()),
        width,
        height,
        source_width,
        source_height,
    }
}

/// Everything needed to render one image off the UI thread.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub id: u64,
    pub path: PathBuf,
    pub viewport: Size,
    pub zoom: f32,
    /// Already decoded source for `path`, skipping the decode when present.
    pub source: Option<Arc<DynamicImage>>,
}

/// A successful render: the decoded source (for reuse) and the frame.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub source: Arc<DynamicImage>,
    pub frame: Frame,
}

#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub id: u64,
    pub path: PathBuf,
    pub result: Result<Rendered>,
}

/// Decodes (unless cached) and renders synchronously.
#[must_use]
pub fn render_blocking(request: RenderRequest) -> RenderOutcome {
    let started = Instant::now();
    let RenderRequest {
        id,
        path,
        viewport,
        zoom,
        source,
    } = request;

    let source = match source {
        Some(source) => Ok(source),
        None => load_image(&path).map(Arc::new),
    };
    let result = source.map(|source| {
        let frame = render_frame(&source, viewport, zoom);
        Rendered { source, frame }
    });

    match &result {
        Ok(rendered) => log::debug!(
            "rendered {} at {}x{} (zoom {zoom:.2}) in {:?}",
            path.display(),
            rendered.frame.width,
            rendered.frame.height,
            started.elapsed()
        ),
        Err(err) => log::error!("failed to render {}: {err}", path.display()),
    }

    RenderOutcome { id, path, result }
}

/// Runs [`render_blocking`] on tokio's blocking thread pool.
pub async fn render_async(request: RenderRequest) -> RenderOutcome {
    let id = request.id;
    let path = request.path.clone();

    match tokio::task::spawn_blocking(move || render_blocking(request)).await {
        Ok(outcome) => outcome,
        Err(err) => RenderOutcome {
            id,
            path,
            result: Err(Error::Decode(format!("render task failed: {err}"))),
        },
    }
}
