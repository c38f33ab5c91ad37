mod command;
mod config;

pub use command::Command;
pub use config::ToolkitConfig;

use tracing::{debug, info, trace, warn};

use crate::error::Result;
use crate::host::{EditMode, Host, ModeGuard};
use crate::interaction::{InputEvent, Modal, ModalChoice, ModalKind, ModalState};
use crate::math::Axis;
use crate::operations::align::{AlignHorizontal, AlignToActive, SmartAlignEdges};
use crate::operations::grid::{GridSnap, SnapToMinorGrid};
use crate::operations::image::{AssignImage, ImageSlots, MatchMode, PickImage, SelectSameImage};
use crate::operations::uv::QuickCubeProjection;
use crate::operations::view::AlignViewToFace;
use crate::topology::MeshStore;

/// How a command invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran to completion.
    Finished,
    /// A modal command is waiting for a key press.
    AwaitingInput,
}

/// One editing session of the tools.
///
/// Owns the session-scoped state: configuration, the image slots and at
/// most one pending modal. The mesh and host are lent in per call.
#[derive(Debug)]
pub struct Toolkit {
    config: ToolkitConfig,
    slots: ImageSlots,
    pending: Option<Modal>,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self {
            config: ToolkitConfig::default(),
            slots: ImageSlots::new(),
            pending: None,
        }
    }
}

impl Toolkit {
    /// Starts a session with empty image slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ToolkitConfig) -> Result<Self> {
        config.validate()?;
        info!("quickmap session started");
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// The image slots filled so far in this session.
    #[must_use]
    pub fn slots(&self) -> &ImageSlots {
        &self.slots
    }

    /// State of the pending modal, or [`ModalState::Idle`] if none.
    #[must_use]
    pub fn pending_state(&self) -> ModalState {
        self.pending.as_ref().map_or(ModalState::Idle, Modal::state)
    }

    /// Forgets all session state: slots and any pending modal.
    pub fn reset_session<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.abandon_pending(host);
        self.slots.clear();
        debug!("session state cleared");
    }

    /// Runs a menu command.
    ///
    /// Immediate commands finish before returning. Modal commands show
    /// their prompt and return [`CommandOutcome::AwaitingInput`]; feed key
    /// presses to [`Toolkit::handle_input`]. Starting any command abandons
    /// a modal that is still waiting.
    ///
    /// # Errors
    ///
    /// Returns the operation's error. Nothing is changed when an error is
    /// returned and the host is back in its previous mode.
    pub fn execute<H: Host + ?Sized>(
        &mut self,
        command: Command,
        mesh: &mut MeshStore,
        host: &mut H,
    ) -> Result<CommandOutcome> {
        self.abandon_pending(host);
        trace!(%command, "executing command");

        match command {
            Command::AlignX => align_on(Axis::X, mesh, host)?,
            Command::AlignY => align_on(Axis::Y, mesh, host)?,
            Command::AlignZ => align_on(Axis::Z, mesh, host)?,
            Command::AlignHorizontal => {
                let _guard = ModeGuard::enter(host, EditMode::Object);
                AlignHorizontal::new().execute(mesh)?;
            }
            Command::SmartAlignEdges => {
                let _guard = ModeGuard::enter(host, EditMode::Object);
                SmartAlignEdges::new().execute(mesh)?;
            }
            Command::AlignViewToNormal => {
                let mut guard = ModeGuard::enter(host, EditMode::Object);
                AlignViewToFace::new().execute(mesh, &mut *guard)?;
            }
            Command::QuickCubeMap => {
                QuickCubeProjection::new(self.config.quick_cube_scale).execute(host)?;
            }
            Command::QuickCubeMapHalf => {
                QuickCubeProjection::new(self.config.half_cube_scale).execute(host)?;
            }
            Command::SnapToMinorGrid => {
                let grid = host.grid_settings();
                let _guard = ModeGuard::enter(host, EditMode::Object);
                SnapToMinorGrid::new(grid).execute(mesh)?;
            }
            Command::SelectSameImage | Command::SelectLinkedSameImage => {
                let mode = if command == Command::SelectLinkedSameImage {
                    MatchMode::Linked
                } else {
                    MatchMode::Global
                };
                let _guard = ModeGuard::enter(host, EditMode::Object);
                SelectSameImage::new(mode).execute(mesh)?;
            }
            Command::ToggleBackfaces => host.toggle_backface_culling(),
            Command::ToggleEdgeLength => host.toggle_edge_lengths(),
            Command::CubeMapModal => {
                return Ok(self.begin_modal(ModalKind::CubeScale(self.config.cube_presets), host));
            }
            Command::GridSnapAxis => {
                return Ok(self.begin_modal(ModalKind::GridAxis { on_minor: false }, host));
            }
            Command::GridSnapAxisMinor => {
                return Ok(self.begin_modal(ModalKind::GridAxis { on_minor: true }, host));
            }
            Command::PickImage => return Ok(self.begin_modal(ModalKind::PickImage, host)),
            Command::AssignImage => return Ok(self.begin_modal(ModalKind::AssignImage, host)),
        }
        Ok(CommandOutcome::Finished)
    }

    /// Delivers one input event to the pending modal.
    ///
    /// Returns the modal's state after the event, or [`ModalState::Idle`]
    /// when nothing is pending. The prompt is cleared once the modal ends.
    ///
    /// # Errors
    ///
    /// Returns the error of the applied choice. The modal ends cancelled
    /// and nothing is changed.
    pub fn handle_input<H: Host + ?Sized>(
        &mut self,
        event: InputEvent,
        mesh: &mut MeshStore,
        host: &mut H,
    ) -> Result<ModalState> {
        let Some(modal) = self.pending.as_mut() else {
            return Ok(ModalState::Idle);
        };

        let Some(choice) = modal.feed(event) else {
            let state = modal.state();
            if modal.is_finished() {
                host.set_header_text(None);
                self.pending = None;
            }
            return Ok(state);
        };

        let kind = modal.kind();
        host.set_header_text(None);
        let applied = self.apply_choice(kind, choice, mesh, host);

        let Some(mut modal) = self.pending.take() else {
            return Ok(ModalState::Idle);
        };
        match applied {
            Ok(applied) => {
                modal.finish(applied);
                Ok(modal.state())
            }
            Err(err) => {
                modal.finish(false);
                warn!(%err, ?kind, "modal command failed");
                Err(err)
            }
        }
    }

    fn begin_modal<H: Host + ?Sized>(&mut self, kind: ModalKind, host: &mut H) -> CommandOutcome {
        let mut modal = Modal::new(kind);
        modal.invoke();
        host.set_header_text(Some(modal.prompt().as_str()));
        self.pending = Some(modal);
        CommandOutcome::AwaitingInput
    }

    fn abandon_pending<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(mut modal) = self.pending.take() {
            modal.cancel();
            host.set_header_text(None);
            debug!(kind = ?modal.kind(), "abandoned pending modal");
        }
    }

    /// Applies a modal's choice. `Ok(false)` means "cancel without effect".
    fn apply_choice<H: Host + ?Sized>(
        &mut self,
        kind: ModalKind,
        choice: ModalChoice,
        mesh: &mut MeshStore,
        host: &mut H,
    ) -> Result<bool> {
        match (kind, choice) {
            (ModalKind::GridAxis { on_minor }, ModalChoice::Axis(axis)) => {
                let grid = host.grid_settings();
                let _guard = ModeGuard::enter(host, EditMode::Object);
                GridSnap::new(axis, on_minor, grid).execute(mesh)?;
                Ok(true)
            }
            (ModalKind::CubeScale(_), ModalChoice::Scale(scale)) => {
                QuickCubeProjection::new(scale).execute(host)?;
                Ok(true)
            }
            (ModalKind::PickImage, ModalChoice::Slot(slot)) => {
                let _guard = ModeGuard::enter(host, EditMode::Object);
                PickImage::new(slot).execute(mesh, &mut self.slots)?;
                Ok(true)
            }
            (ModalKind::AssignImage, ModalChoice::Slot(slot)) => {
                if self.slots.get(slot).is_none() {
                    debug!(%slot, "image slot is empty");
                    return Ok(false);
                }
                let guard = ModeGuard::enter(host, EditMode::Object);
                AssignImage::new(slot).execute(mesh, &self.slots, &*guard)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

fn align_on<H: Host + ?Sized>(axis: Axis, mesh: &mut MeshStore, host: &mut H) -> Result<()> {
    let _guard = ModeGuard::enter(host, EditMode::Object);
    AlignToActive::new(axis).execute(mesh)?;
    Ok(())
}
