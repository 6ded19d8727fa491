// SPDX-License-Identifier: MPL-2.0
//! Turns viewer effects into iced tasks.
//!
//! The viewer component decides *what* should happen; this module owns the
//! runtime handles (window id, slideshow timer) and performs it.

use super::Message;
use crate::directory_scanner::scan_directory_async;
use crate::i18n::fluent::I18n;
use crate::media::render_async;
use crate::ui::notifications;
use crate::ui::viewer::component::{self, Effect};
use iced::task::Handle;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Duration;

/// Mutable runtime state touched while performing effects.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a mut notifications::Manager,
    pub window_id: Option<window::Id>,
    /// Abort handle of the pending slideshow timer, if one is armed.
    pub slideshow_timer: &'a mut Option<Handle>,
}

/// Forwards a message to the viewer and performs the resulting effect.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    viewer: &mut component::State,
    message: component::Message,
) -> Task<Message> {
    let effect = viewer.handle_message(message);
    run_effect(ctx, effect)
}

pub fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::PickFolder => pick_folder(ctx.i18n.tr("toolbar-open-folder")),
        Effect::ScanFolder { request, folder } => scan_folder(request, folder),
        Effect::Render(request) => Task::perform(render_async(request), |outcome| {
            Message::Viewer(component::Message::Rendered(outcome))
        }),
        Effect::ArmSlideshowTimer {
            generation,
            interval,
        } => arm_slideshow_timer(ctx.slideshow_timer, generation, interval),
        Effect::CancelSlideshowTimer => {
            if let Some(handle) = ctx.slideshow_timer.take() {
                handle.abort();
            }
            Task::none()
        }
        Effect::SetFullscreen(fullscreen) => set_fullscreen(ctx.window_id, fullscreen),
        Effect::Exit => {
            if let Some(handle) = ctx.slideshow_timer.take() {
                handle.abort();
            }
            log::info!("exiting");
            iced::exit()
        }
        Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        Effect::ClearLoadErrors => {
            ctx.notifications.clear_load_errors();
            Task::none()
        }
        Effect::Batch(effects) => {
            let tasks: Vec<Task<Message>> = effects
                .into_iter()
                .map(|effect| run_effect(ctx, effect))
                .collect();
            Task::batch(tasks)
        }
    }
}

fn pick_folder(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |folder| Message::Viewer(component::Message::FolderPicked(folder)),
    )
}

fn scan_folder(request: u64, folder: PathBuf) -> Task<Message> {
    let scanned = folder.clone();
    Task::perform(scan_directory_async(scanned), move |result| {
        Message::Viewer(component::Message::FolderScanned {
            request,
            folder,
            result,
        })
    })
}

/// Arms a one-shot timer for the next slideshow advance.
///
/// Any previously armed timer is aborted first, so at most one tick is
/// ever pending.
fn arm_slideshow_timer(
    slot: &mut Option<Handle>,
    generation: u64,
    interval: Duration,
) -> Task<Message> {
    if let Some(previous) = slot.take() {
        previous.abort();
    }

    let (task, handle) = Task::perform(tokio::time::sleep(interval), move |()| {
        Message::Viewer(component::Message::SlideshowTick { generation })
    })
    .abortable();

    *slot = Some(handle);
    task
}

fn set_fullscreen(window_id: Option<window::Id>, fullscreen: bool) -> Task<Message> {
    let Some(window_id) = window_id else {
        log::warn!("window not ready, cannot change fullscreen mode");
        return Task::none();
    };

    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(window_id, mode)
}
