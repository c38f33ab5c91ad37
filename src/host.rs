//! Interfaces to the host application that owns the editor.
//!
//! The tools never talk to a UI toolkit directly. Everything they need
//! from the surrounding editor goes through these traits.

use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::math::UnitQuaternion;
use crate::operations::grid::GridSettings;
use crate::topology::ImageKey;

/// Interaction mode of the edited object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Object mode. Mesh data may be read and written directly.
    Object,
    /// Mesh edit mode.
    Edit,
}

/// Switches the edited object between interaction modes.
pub trait ModeSwitch {
    /// The current mode.
    fn mode(&self) -> EditMode;

    /// Enters `mode`.
    fn set_mode(&mut self, mode: EditMode);
}

/// Runs the host's UV cube projection on the selected faces.
pub trait CubeProjector {
    /// Projects UVs with the given cube size.
    ///
    /// # Errors
    ///
    /// Returns an error if the host operator fails.
    fn cube_project(&mut self, scale: f64) -> Result<()>;
}

/// The 3D viewport the tools are invoked from.
pub trait Viewport {
    /// Replaces the view orientation.
    fn set_view_rotation(&mut self, rotation: UnitQuaternion);

    /// The grid spacing currently displayed.
    fn grid_settings(&self) -> GridSettings;

    /// Shows a prompt in the header, or clears it with `None`.
    fn set_header_text(&mut self, text: Option<&str>);

    /// Flips backface culling.
    fn toggle_backface_culling(&mut self);

    /// Flips the edge-length overlay.
    fn toggle_edge_lengths(&mut self);
}

/// The host's registry of loaded images.
pub trait ImageRegistry {
    /// Returns `true` if an image with this key is loaded.
    fn contains_image(&self, key: &ImageKey) -> bool;
}

/// Everything the toolkit needs from the host.
pub trait Host: ModeSwitch + CubeProjector + Viewport + ImageRegistry {}

impl<T: ModeSwitch + CubeProjector + Viewport + ImageRegistry> Host for T {}

/// Scoped mode switch.
///
/// Entering stores the previous mode; dropping the guard restores it on
/// every exit path, including early returns through `?`. The guard
/// dereferences to the host so work can continue while it is held.
pub struct ModeGuard<'a, H: ModeSwitch + ?Sized> {
    host: &'a mut H,
    previous: EditMode,
}

impl<'a, H: ModeSwitch + ?Sized> ModeGuard<'a, H> {
    /// Switches `host` into `mode` until the guard is dropped.
    pub fn enter(host: &'a mut H, mode: EditMode) -> Self {
        let previous = host.mode();
        if previous != mode {
            host.set_mode(mode);
        }
        Self { host, previous }
    }

    /// The mode that will be restored.
    #[must_use]
    pub fn previous(&self) -> EditMode {
        self.previous
    }
}

impl<H: ModeSwitch + ?Sized> Deref for ModeGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: ModeSwitch + ?Sized> DerefMut for ModeGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: ModeSwitch + ?Sized> Drop for ModeGuard<'_, H> {
    fn drop(&mut self) {
        if self.host.mode() != self.previous {
            self.host.set_mode(self.previous);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod mock {
    use std::collections::HashSet;

    use super::*;
    use crate::error::HostError;

    /// In-memory host that records every call.
    #[derive(Debug)]
    pub struct MockHost {
        pub mode: EditMode,
        pub mode_changes: Vec<EditMode>,
        pub grid: GridSettings,
        pub projections: Vec<f64>,
        pub fail_projection: bool,
        pub view_rotation: Option<UnitQuaternion>,
        pub header: Option<String>,
        pub header_history: Vec<Option<String>>,
        pub backface_culling: bool,
        pub edge_lengths: bool,
        pub images: HashSet<ImageKey>,
    }

    impl Default for MockHost {
        fn default() -> Self {
            Self {
                mode: EditMode::Edit,
                mode_changes: Vec::new(),
                grid: GridSettings::default(),
                projections: Vec::new(),
                fail_projection: false,
                view_rotation: None,
                header: None,
                header_history: Vec::new(),
                backface_culling: false,
                edge_lengths: false,
                images: HashSet::new(),
            }
        }
    }

    impl MockHost {
        pub fn with_images(names: &[&str]) -> Self {
            Self {
                images: names.iter().map(|n| ImageKey::new(*n)).collect(),
                ..Self::default()
            }
        }
    }

    impl ModeSwitch for MockHost {
        fn mode(&self) -> EditMode {
            self.mode
        }

        fn set_mode(&mut self, mode: EditMode) {
            self.mode = mode;
            self.mode_changes.push(mode);
        }
    }

    impl CubeProjector for MockHost {
        fn cube_project(&mut self, scale: f64) -> Result<()> {
            if self.fail_projection {
                return Err(HostError::OperatorFailed("cube projection".into()).into());
            }
            self.projections.push(scale);
            Ok(())
        }
    }

    impl Viewport for MockHost {
        fn set_view_rotation(&mut self, rotation: UnitQuaternion) {
            self.view_rotation = Some(rotation);
        }

        fn grid_settings(&self) -> GridSettings {
            self.grid
        }

        fn set_header_text(&mut self, text: Option<&str>) {
            self.header = text.map(str::to_owned);
            self.header_history.push(self.header.clone());
        }

        fn toggle_backface_culling(&mut self) {
            self.backface_culling ^= true;
        }

        fn toggle_edge_lengths(&mut self) {
            self.edge_lengths ^= true;
        }
    }

    impl ImageRegistry for MockHost {
        fn contains_image(&self, key: &ImageKey) -> bool {
            self.images.contains(key)
        }
    }
}
