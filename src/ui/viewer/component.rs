// SPDX-License-Identifier: MPL-2.0
//! Image browser component: state, messages and effects.
//!
//! `State::handle_message` is pure. It mutates the browser state and
//! returns an [`Effect`] describing the side effect the application shell
//! must run (open a dialog, scan a folder, render, arm a timer, ...).
//! Nothing here touches iced tasks, the filesystem or the clock.

use super::status::Status;
use crate::directory_scanner::ImageList;
use crate::error::Error;
use crate::image_navigation::ImageNavigator;
use crate::media::{Frame, RenderOutcome, RenderRequest};
use crate::ui::notifications::Notification;
use crate::ui::state::{Slideshow, ViewportState, ZoomLevel};
use iced::Size;
use image_rs::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// The user-facing commands, one per toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    OpenFolder,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    StartSlideshow,
    StopSlideshow,
    ToggleFullscreen,
    Exit,
}

#[derive(Debug, Clone)]
pub enum Message {
    Command(Command),
    /// Space bar: start when stopped, stop when running.
    ToggleSlideshow,
    /// Escape: leave fullscreen, ignored when windowed.
    LeaveFullscreen,
    /// Folder dialog closed; `None` when the user cancelled.
    FolderPicked(Option<PathBuf>),
    FolderScanned {
        request: u64,
        folder: PathBuf,
        result: Result<ImageList, Error>,
    },
    Rendered(RenderOutcome),
    SlideshowTick {
        generation: u64,
    },
    WindowResized(Size),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug)]
pub enum Effect {
    None,
    PickFolder,
    ScanFolder {
        request: u64,
        folder: PathBuf,
    },
    Render(RenderRequest),
    /// Arm a one-shot timer that answers with `SlideshowTick { generation }`.
    ArmSlideshowTimer {
        generation: u64,
        interval: Duration,
    },
    CancelSlideshowTimer,
    SetFullscreen(bool),
    Exit,
    Notify(Notification),
    /// An image displayed fine; earlier load errors are obsolete.
    ClearLoadErrors,
    Batch(Vec<Effect>),
}

impl Effect {
    /// Combines effects, dropping `None`s and unwrapping single entries.
    #[must_use]
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        let mut effects: Vec<Effect> = effects
            .into_iter()
            .filter(|effect| !matches!(effect, Effect::None))
            .collect();

        match effects.len() {
            0 => Effect::None,
            1 => effects.pop().unwrap_or(Effect::None),
            _ => Effect::Batch(effects),
        }
    }
}

/// Decoded pixels of the image currently shown, reused by zoom and resize.
struct CachedSource {
    path: PathBuf,
    image: Arc<DynamicImage>,
}

impl std::fmt::Debug for CachedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedSource")
            .field("path", &self.path)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

/// What the canvas should show when there is no frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoFolder,
    NoImages,
    Loading,
    LoadFailed,
}

#[derive(Debug, Default)]
pub struct State {
    navigator: ImageNavigator,
    folder: Option<PathBuf>,
    zoom: ZoomLevel,
    slideshow: Slideshow,
    fullscreen: bool,
    viewport: ViewportState,
    frame: Option<Frame>,
    source: Option<CachedSource>,
    load_failed: bool,
    status: Status,
    /// Render whose success keeps the current status instead of showing
    /// image details.
    hold_status_for: Option<u64>,
    latest_scan: u64,
    latest_render: u64,
}

impl State {
    #[must_use]
    pub fn new(slideshow_interval: Duration) -> Self {
        Self {
            slideshow: Slideshow::new(slideshow_interval),
            ..Self::default()
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Command(command) => self.handle_command(command),
            Message::ToggleSlideshow => {
                if self.slideshow.is_running() {
                    self.stop_slideshow()
                } else {
                    self.start_slideshow()
                }
            }
            Message::LeaveFullscreen => {
                if self.fullscreen {
                    self.toggle_fullscreen()
                } else {
                    Effect::None
                }
            }
            Message::FolderPicked(None) => Effect::None,
            Message::FolderPicked(Some(folder)) => {
                self.latest_scan += 1;
                Effect::ScanFolder {
                    request: self.latest_scan,
                    folder,
                }
            }
            Message::FolderScanned {
                request,
                folder,
                result,
            } => {
                if request != self.latest_scan {
                    log::debug!("dropping stale scan of {}", folder.display());
                    return Effect::None;
                }
                match result {
                    Ok(list) => self.install_folder(folder, list),
                    Err(err) => {
                        log::error!("failed to scan {}: {err}", folder.display());
                        self.status = Status::Error {
                            message: err.to_string(),
                        };
                        Effect::Notify(
                            Notification::error("notification-scan-error")
                                .with_arg("message", err.detail()),
                        )
                    }
                }
            }
            Message::Rendered(outcome) => self.handle_rendered(outcome),
            Message::SlideshowTick { generation } => self.handle_tick(generation),
            Message::WindowResized(size) => {
                if !self.viewport.update(size) {
                    return Effect::None;
                }
                if self.navigator.is_empty() || self.load_failed {
                    Effect::None
                } else {
                    self.request_render()
                }
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> Effect {
        match command {
            Command::OpenFolder => Effect::PickFolder,
            Command::Next => self.navigate(true),
            Command::Previous => self.navigate(false),
            Command::ZoomIn => self.apply_zoom(ZoomLevel::zoom_in),
            Command::ZoomOut => self.apply_zoom(ZoomLevel::zoom_out),
            Command::StartSlideshow => self.start_slideshow(),
            Command::StopSlideshow => self.stop_slideshow(),
            Command::ToggleFullscreen => self.toggle_fullscreen(),
            Command::Exit => {
                let cancel = if self.slideshow.stop() {
                    Effect::CancelSlideshowTimer
                } else {
                    Effect::None
                };
                Effect::batch([cancel, Effect::Exit])
            }
        }
    }

    fn install_folder(&mut self, folder: PathBuf, list: ImageList) -> Effect {
        let folder_name = folder_display_name(&folder);

        self.navigator.replace(list);
        self.folder = Some(folder);
        self.zoom = ZoomLevel::default();
        self.frame = None;
        self.source = None;
        self.load_failed = false;
        // Invalidate renders still in flight for the previous folder
        self.latest_render += 1;

        if self.navigator.is_empty() {
            log::warn!("no supported images in {folder_name}");
            self.status = Status::NoImagesFound;
            self.hold_status_for = None;
            let cancel = if self.slideshow.stop() {
                Effect::CancelSlideshowTimer
            } else {
                Effect::None
            };
            return Effect::batch([
                cancel,
                Effect::Notify(Notification::warning("notification-no-images")),
            ]);
        }

        let count = self.navigator.len();
        log::info!("loaded {count} images from {folder_name}");
        self.status = Status::Loaded {
            count,
            folder: folder_name.clone(),
        };
        let render = self.request_render();
        self.hold_status_for = Some(self.latest_render);

        Effect::batch([
            Effect::Notify(
                Notification::info("notification-folder-loaded")
                    .with_arg("count", count.to_string())
                    .with_arg("folder", folder_name),
            ),
            render,
        ])
    }

    fn navigate(&mut self, forward: bool) -> Effect {
        let moved = if forward {
            self.navigator.navigate_next()
        } else {
            self.navigator.navigate_previous()
        };
        if moved.is_none() {
            return Effect::None;
        }

        self.zoom = ZoomLevel::default();
        self.request_render()
    }

    fn apply_zoom(&mut self, step: fn(ZoomLevel) -> ZoomLevel) -> Effect {
        if self.navigator.is_empty() {
            return Effect::None;
        }
        self.zoom = step(self.zoom);
        self.request_render()
    }

    fn start_slideshow(&mut self) -> Effect {
        let Some(generation) = self.slideshow.start(!self.navigator.is_empty()) else {
            return Effect::None;
        };
        log::info!("slideshow started every {:?}", self.slideshow.interval());
        self.status = Status::SlideshowStarted {
            seconds: self.slideshow.interval_secs_display(),
        };
        Effect::ArmSlideshowTimer {
            generation,
            interval: self.slideshow.interval(),
        }
    }

    fn stop_slideshow(&mut self) -> Effect {
        if !self.slideshow.stop() {
            return Effect::None;
        }
        log::info!("slideshow stopped");
        self.status = Status::SlideshowStopped;
        Effect::CancelSlideshowTimer
    }

    fn handle_tick(&mut self, generation: u64) -> Effect {
        if !self.slideshow.accepts_tick(generation) {
            log::debug!("ignoring stale slideshow tick {generation}");
            return Effect::None;
        }
        if self.navigator.is_empty() {
            self.slideshow.stop();
            return Effect::None;
        }

        let render = self.navigate(true);
        Effect::batch([
            render,
            Effect::ArmSlideshowTimer {
                generation,
                interval: self.slideshow.interval(),
            },
        ])
    }

    fn toggle_fullscreen(&mut self) -> Effect {
        self.fullscreen = !self.fullscreen;
        self.status = if self.fullscreen {
            Status::Fullscreen
        } else {
            Status::Windowed
        };

        let rerender = if self.navigator.is_empty() || self.load_failed {
            Effect::None
        } else {
            let render = self.request_render();
            self.hold_status_for = Some(self.latest_render);
            render
        };

        Effect::batch([Effect::SetFullscreen(self.fullscreen), rerender])
    }

    fn request_render(&mut self) -> Effect {
        let Some(path) = self.navigator.current_image_path() else {
            return Effect::None;
        };

        self.latest_render += 1;
        let source = self
            .source
            .as_ref()
            .filter(|cached| cached.path == path)
            .map(|cached| Arc::clone(&cached.image));

        Effect::Render(RenderRequest {
            id: self.latest_render,
            path: path.to_path_buf(),
            viewport: self.viewport.canvas_size(self.fullscreen),
            zoom: self.zoom.value(),
            source,
        })
    }

    fn handle_rendered(&mut self, outcome: RenderOutcome) -> Effect {
        if outcome.id != self.latest_render {
            log::debug!("dropping stale render of {}", outcome.path.display());
            return Effect::None;
        }

        match outcome.result {
            Ok(rendered) => {
                let frame = rendered.frame;
                if self.hold_status_for.take() != Some(outcome.id) {
                    self.status = Status::Showing {
                        index: self.navigator.current_index().unwrap_or(0),
                        count: self.navigator.len(),
                        width: frame.source_width,
                        height: frame.source_height,
                        zoom: self.zoom.display(),
                    };
                }
                self.source = Some(CachedSource {
                    path: outcome.path,
                    image: rendered.source,
                });
                self.frame = Some(frame);
                self.load_failed = false;
                Effect::ClearLoadErrors
            }
            Err(err) => {
                self.frame = None;
                self.source = None;
                self.load_failed = true;
                self.hold_status_for = None;
                self.status = Status::Error {
                    message: err.to_string(),
                };
                Effect::Notify(
                    Notification::error("notification-load-error")
                        .with_arg("message", err.to_string()),
                )
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_slideshow_running(&self) -> bool {
        self.slideshow.is_running()
    }

    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.navigator.is_empty()
    }

    #[must_use]
    pub fn navigator(&self) -> &ImageNavigator {
        &self.navigator
    }

    /// File name of the image at the current index, if any.
    #[must_use]
    pub fn current_file_name(&self) -> Option<String> {
        self.navigator
            .current_image_path()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    #[must_use]
    pub fn placeholder(&self) -> Placeholder {
        if self.folder.is_none() {
            Placeholder::NoFolder
        } else if self.navigator.is_empty() {
            Placeholder::NoImages
        } else if self.load_failed {
            Placeholder::LoadFailed
        } else {
            Placeholder::Loading
        }
    }
}

fn folder_display_name(folder: &Path) -> String {
    folder.file_name().map_or_else(
        || folder.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{render_frame, Rendered};
    use crate::test_utils::assert_abs_diff_eq;
    use image_rs::{Rgba, RgbaImage};

    fn flatten(effect: Effect) -> Vec<Effect> {
        match effect {
            Effect::None => Vec::new(),
            Effect::Batch(effects) => effects.into_iter().flat_map(flatten).collect(),
            other => vec![other],
        }
    }

    fn render_request(effects: &[Effect]) -> Option<&RenderRequest> {
        effects.iter().find_map(|effect| match effect {
            Effect::Render(request) => Some(request),
            _ => None,
        })
    }

    fn image_list(names: &[&str]) -> ImageList {
        ImageList::from_paths(names.iter().map(|name| PathBuf::from("/photos").join(name)))
    }

    /// Loads a folder through the same message flow the app uses.
    fn loaded_state(names: &[&str]) -> State {
        let mut state = State::default();
        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/photos"))));
        state.handle_message(Message::FolderScanned {
            request: 1,
            folder: PathBuf::from("/photos"),
            result: Ok(image_list(names)),
        });
        state
    }

    fn success(request: &RenderRequest, width: u32, height: u32) -> Message {
        let image = Arc::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([9, 9, 9, 255]),
        )));
        let frame = render_frame(&image, request.viewport, request.zoom);
        Message::Rendered(RenderOutcome {
            id: request.id,
            path: request.path.clone(),
            result: Ok(Rendered {
                source: image,
                frame,
            }),
        })
    }

    fn command(state: &mut State, command: Command) -> Vec<Effect> {
        flatten(state.handle_message(Message::Command(command)))
    }

    #[test]
    fn initial_state_is_ready_and_empty() {
        let state = State::default();
        assert_eq!(state.status(), &Status::Ready);
        assert!(!state.has_images());
        assert_eq!(state.placeholder(), Placeholder::NoFolder);
    }

    #[test]
    fn open_folder_requests_dialog() {
        let mut state = State::default();
        let effects = command(&mut state, Command::OpenFolder);
        assert!(matches!(effects.as_slice(), [Effect::PickFolder]));
    }

    #[test]
    fn cancelled_dialog_changes_nothing() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        command(&mut state, Command::Next);
        let status_before = state.status().clone();

        let effect = state.handle_message(Message::FolderPicked(None));

        assert!(matches!(effect, Effect::None));
        assert_eq!(state.navigator().current_index(), Some(1));
        assert_eq!(state.status(), &status_before);
    }

    #[test]
    fn loading_folder_resets_view_and_renders_first_image() {
        let mut state = loaded_state(&["a.png", "b.png", "c.png"]);
        command(&mut state, Command::Next);
        command(&mut state, Command::ZoomIn);

        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/photos"))));
        let effects = flatten(state.handle_message(Message::FolderScanned {
            request: 2,
            folder: PathBuf::from("/photos"),
            result: Ok(image_list(&["x.jpg", "y.jpg"])),
        }));

        assert_eq!(state.navigator().current_index(), Some(0));
        assert_abs_diff_eq!(state.zoom().value(), 1.0);
        assert_eq!(
            state.status(),
            &Status::Loaded {
                count: 2,
                folder: "photos".into()
            }
        );
        let request = render_request(&effects).expect("render requested");
        assert_eq!(request.path, PathBuf::from("/photos/x.jpg"));
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify(n) if n.message_key() == "notification-folder-loaded"
        )));
    }

    #[test]
    fn loaded_status_survives_first_render() {
        let mut state = State::default();
        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/photos"))));
        let effects = flatten(state.handle_message(Message::FolderScanned {
            request: 1,
            folder: PathBuf::from("/photos"),
            result: Ok(image_list(&["a.png"])),
        }));
        let request = render_request(&effects).expect("render requested");

        state.handle_message(success(request, 10, 10));

        assert!(matches!(state.status(), Status::Loaded { count: 1, .. }));
        assert!(state.frame().is_some());

        command(&mut state, Command::ZoomIn);
        assert!(matches!(state.status(), Status::Loaded { .. }));
    }

    #[test]
    fn empty_folder_warns_and_clears_set() {
        let mut state = loaded_state(&["a.png"]);
        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/empty"))));
        let effects = flatten(state.handle_message(Message::FolderScanned {
            request: 2,
            folder: PathBuf::from("/empty"),
            result: Ok(ImageList::new()),
        }));

        assert_eq!(state.status(), &Status::NoImagesFound);
        assert!(!state.has_images());
        assert!(state.frame().is_none());
        assert_eq!(state.placeholder(), Placeholder::NoImages);
        assert!(render_request(&effects).is_none());
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify(n) if n.message_key() == "notification-no-images"
        )));
    }

    #[test]
    fn scan_failure_keeps_previous_set() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/locked"))));
        let effect = state.handle_message(Message::FolderScanned {
            request: 2,
            folder: PathBuf::from("/locked"),
            result: Err(Error::Io("permission denied".into())),
        });

        assert!(matches!(effect, Effect::Notify(_)));
        assert_eq!(state.navigator().len(), 2);
        assert!(state.status().is_error());
    }

    #[test]
    fn stale_scan_results_are_ignored() {
        let mut state = State::default();
        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/first"))));
        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/second"))));

        let effect = state.handle_message(Message::FolderScanned {
            request: 1,
            folder: PathBuf::from("/first"),
            result: Ok(image_list(&["a.png"])),
        });

        assert!(matches!(effect, Effect::None));
        assert!(!state.has_images());
    }

    #[test]
    fn navigation_wraps_and_resets_zoom() {
        let mut state = loaded_state(&["a.png", "b.png", "c.png"]);
        command(&mut state, Command::ZoomIn);

        let effects = command(&mut state, Command::Previous);

        assert_eq!(state.navigator().current_index(), Some(2));
        assert_abs_diff_eq!(state.zoom().value(), 1.0);
        let request = render_request(&effects).expect("render requested");
        assert_eq!(request.path, PathBuf::from("/photos/c.png"));
        assert_abs_diff_eq!(request.zoom, 1.0);

        command(&mut state, Command::Next);
        assert_eq!(state.navigator().current_index(), Some(0));
    }

    #[test]
    fn commands_on_empty_set_are_silent_no_ops() {
        let mut state = State::default();
        for cmd in [
            Command::Next,
            Command::Previous,
            Command::ZoomIn,
            Command::ZoomOut,
            Command::StartSlideshow,
            Command::StopSlideshow,
        ] {
            assert!(command(&mut state, cmd).is_empty(), "{cmd:?} should be a no-op");
        }
        assert_eq!(state.status(), &Status::Ready);
        assert_abs_diff_eq!(state.zoom().value(), 1.0);
        assert!(!state.is_slideshow_running());
    }

    #[test]
    fn zoom_in_twenty_times_clamps_at_five() {
        let mut state = loaded_state(&["a.png"]);
        let mut last = None;
        for _ in 0..20 {
            last = Some(command(&mut state, Command::ZoomIn));
        }

        assert_abs_diff_eq!(state.zoom().value(), 5.0);
        let effects = last.expect("zoomed");
        let request = render_request(&effects).expect("render requested");
        assert_abs_diff_eq!(request.zoom, 5.0);
    }

    #[test]
    fn rendered_frame_updates_status_with_source_size() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        let effects = command(&mut state, Command::Next);
        let request = render_request(&effects).expect("render requested");

        let effect = state.handle_message(success(request, 64, 48));

        assert!(matches!(effect, Effect::ClearLoadErrors));
        assert_eq!(
            state.status(),
            &Status::Showing {
                index: 1,
                count: 2,
                width: 64,
                height: 48,
                zoom: "1.0".into()
            }
        );
        assert_eq!(state.current_file_name().as_deref(), Some("b.png"));
    }

    #[test]
    fn navigating_before_first_render_shows_image_status() {
        let mut state = State::default();
        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/photos"))));
        let effects = flatten(state.handle_message(Message::FolderScanned {
            request: 1,
            folder: PathBuf::from("/photos"),
            result: Ok(image_list(&["a.png", "b.png", "c.png"])),
        }));
        let first = render_request(&effects).expect("render requested").clone();
        let effects = command(&mut state, Command::Next);
        let second = render_request(&effects).expect("render requested").clone();

        let effect = state.handle_message(success(&first, 8, 8));
        assert!(matches!(effect, Effect::None));
        assert!(matches!(state.status(), Status::Loaded { count: 3, .. }));

        state.handle_message(success(&second, 30, 20));
        assert_eq!(
            state.status(),
            &Status::Showing {
                index: 1,
                count: 3,
                width: 30,
                height: 20,
                zoom: "1.0".into()
            }
        );
    }

    #[test]
    fn navigating_during_fullscreen_rerender_shows_image_status() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        let effects = command(&mut state, Command::ToggleFullscreen);
        let toggle = render_request(&effects).expect("render requested").clone();
        let effects = command(&mut state, Command::Next);
        let next = render_request(&effects).expect("render requested").clone();

        state.handle_message(success(&toggle, 8, 8));
        state.handle_message(success(&next, 12, 6));

        assert!(matches!(
            state.status(),
            Status::Showing {
                index: 1,
                width: 12,
                height: 6,
                ..
            }
        ));
    }

    #[test]
    fn zoom_rerender_reuses_decoded_source() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        let effects = command(&mut state, Command::Next);
        let request = render_request(&effects).expect("render requested");
        assert!(request.source.is_none());
        state.handle_message(success(request, 20, 20));

        let effects = command(&mut state, Command::ZoomIn);
        let request = render_request(&effects).expect("render requested");
        assert!(request.source.is_some());

        let effects = command(&mut state, Command::Next);
        let request = render_request(&effects).expect("render requested");
        assert!(request.source.is_none());
    }

    #[test]
    fn stale_render_is_dropped() {
        let mut state = loaded_state(&["a.png", "b.png", "c.png"]);
        let first = command(&mut state, Command::Next);
        let second = command(&mut state, Command::Next);
        let stale = render_request(&first).expect("render requested");

        let effect = state.handle_message(success(stale, 5, 5));

        assert!(matches!(effect, Effect::None));
        assert!(state.frame().is_none());
        assert!(render_request(&second).is_some());
    }

    #[test]
    fn decode_failure_reports_error_and_keeps_position() {
        let mut state = loaded_state(&["a.png", "b.png", "c.png"]);
        let effects = command(&mut state, Command::Next);
        let request = render_request(&effects).expect("render requested");

        let effect = state.handle_message(Message::Rendered(RenderOutcome {
            id: request.id,
            path: request.path.clone(),
            result: Err(Error::Decode("corrupt header".into())),
        }));

        assert!(matches!(
            effect,
            Effect::Notify(ref n) if n.message_key() == "notification-load-error"
        ));
        assert_eq!(
            state.status(),
            &Status::Error {
                message: "corrupt header".into()
            }
        );
        assert_eq!(state.navigator().current_index(), Some(1));
        assert_eq!(state.navigator().len(), 3);
        assert_eq!(state.current_file_name().as_deref(), Some("b.png"));
        assert_eq!(state.placeholder(), Placeholder::LoadFailed);

        // Still usable
        let effects = command(&mut state, Command::Next);
        assert!(render_request(&effects).is_some());
        assert_eq!(state.navigator().current_index(), Some(2));
    }

    #[test]
    fn resize_rerenders_unless_load_failed() {
        let mut state = loaded_state(&["a.png"]);
        let effects =
            flatten(state.handle_message(Message::WindowResized(Size::new(640.0, 480.0))));
        let request = render_request(&effects).expect("render requested");
        assert_abs_diff_eq!(request.viewport.width, 640.0);

        // Same size again is ignored
        let effect = state.handle_message(Message::WindowResized(Size::new(640.0, 480.0)));
        assert!(matches!(effect, Effect::None));

        state.handle_message(Message::Rendered(RenderOutcome {
            id: request.id,
            path: request.path.clone(),
            result: Err(Error::Decode("nope".into())),
        }));
        let effect = state.handle_message(Message::WindowResized(Size::new(800.0, 600.0)));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn slideshow_advances_once_per_tick_until_stopped() {
        let mut state = loaded_state(&["a.png", "b.png", "c.png"]);

        let effects = command(&mut state, Command::StartSlideshow);
        let generation = match effects.as_slice() {
            [Effect::ArmSlideshowTimer {
                generation,
                interval,
            }] => {
                assert_eq!(*interval, Duration::from_millis(2000));
                *generation
            }
            other => panic!("expected timer, got {other:?}"),
        };
        assert_eq!(
            state.status(),
            &Status::SlideshowStarted {
                seconds: "2".into()
            }
        );
        // No advance before the first tick
        assert_eq!(state.navigator().current_index(), Some(0));

        let effects = flatten(state.handle_message(Message::SlideshowTick { generation }));
        assert_eq!(state.navigator().current_index(), Some(1));
        assert!(render_request(&effects).is_some());
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::ArmSlideshowTimer { generation: g, .. } if *g == generation
        )));

        let effects = command(&mut state, Command::StopSlideshow);
        assert!(matches!(effects.as_slice(), [Effect::CancelSlideshowTimer]));
        assert_eq!(state.status(), &Status::SlideshowStopped);

        // A tick already in flight must not advance
        let effect = state.handle_message(Message::SlideshowTick { generation });
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.navigator().current_index(), Some(1));
    }

    #[test]
    fn slideshow_start_and_stop_are_idempotent() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        assert!(command(&mut state, Command::StopSlideshow).is_empty());
        assert_eq!(command(&mut state, Command::StartSlideshow).len(), 1);
        assert!(command(&mut state, Command::StartSlideshow).is_empty());
        assert!(state.is_slideshow_running());
    }

    #[test]
    fn space_toggles_slideshow() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        state.handle_message(Message::ToggleSlideshow);
        assert!(state.is_slideshow_running());
        state.handle_message(Message::ToggleSlideshow);
        assert!(!state.is_slideshow_running());
    }

    #[test]
    fn slideshow_tick_advances_with_wraparound_and_zoom_reset() {
        let mut state = loaded_state(&["a.png", "b.png"]);
        let effects = command(&mut state, Command::StartSlideshow);
        let Some(Effect::ArmSlideshowTimer { generation, .. }) = effects.first() else {
            panic!("expected timer");
        };
        let generation = *generation;
        command(&mut state, Command::ZoomIn);

        state.handle_message(Message::SlideshowTick { generation });
        state.handle_message(Message::SlideshowTick { generation });

        assert_eq!(state.navigator().current_index(), Some(0));
        assert_abs_diff_eq!(state.zoom().value(), 1.0);
    }

    #[test]
    fn loading_empty_folder_stops_running_slideshow() {
        let mut state = loaded_state(&["a.png"]);
        command(&mut state, Command::StartSlideshow);

        state.handle_message(Message::FolderPicked(Some(PathBuf::from("/empty"))));
        let effects = flatten(state.handle_message(Message::FolderScanned {
            request: 2,
            folder: PathBuf::from("/empty"),
            result: Ok(ImageList::new()),
        }));

        assert!(!state.is_slideshow_running());
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::CancelSlideshowTimer)));
    }

    #[test]
    fn fullscreen_toggle_flips_flag_and_status() {
        let mut state = State::default();

        let effects = command(&mut state, Command::ToggleFullscreen);
        assert!(state.is_fullscreen());
        assert_eq!(state.status(), &Status::Fullscreen);
        assert!(matches!(effects.as_slice(), [Effect::SetFullscreen(true)]));

        state.handle_message(Message::LeaveFullscreen);
        assert!(!state.is_fullscreen());
        assert_eq!(state.status(), &Status::Windowed);

        let effect = state.handle_message(Message::LeaveFullscreen);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn fullscreen_rerender_uses_whole_window_and_keeps_status() {
        let mut state = loaded_state(&["a.png"]);
        let effects = command(&mut state, Command::ToggleFullscreen);
        let request = render_request(&effects).expect("render requested");
        assert_eq!(request.viewport, Size::new(1000.0, 700.0));

        state.handle_message(success(request, 10, 10));
        assert_eq!(state.status(), &Status::Fullscreen);
    }

    #[test]
    fn exit_cancels_running_slideshow() {
        let mut state = loaded_state(&["a.png"]);
        command(&mut state, Command::StartSlideshow);

        let effects = command(&mut state, Command::Exit);

        assert!(matches!(
            effects.as_slice(),
            [Effect::CancelSlideshowTimer, Effect::Exit]
        ));
    }

    #[test]
    fn batch_collapses_none_and_singletons() {
        assert!(matches!(Effect::batch([Effect::None, Effect::None]), Effect::None));
        assert!(matches!(
            Effect::batch([Effect::None, Effect::Exit]),
            Effect::Exit
        ));
        assert!(matches!(
            Effect::batch([Effect::PickFolder, Effect::Exit]),
            Effect::Batch(ref effects) if effects.len() == 2
        ));
    }
}
