use std::fmt;

/// Entries of the tools menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AlignZ,
    AlignX,
    AlignY,
    SmartAlignEdges,
    AlignHorizontal,
    AlignViewToNormal,
    QuickCubeMap,
    QuickCubeMapHalf,
    CubeMapModal,
    SnapToMinorGrid,
    GridSnapAxis,
    GridSnapAxisMinor,
    PickImage,
    AssignImage,
    SelectSameImage,
    SelectLinkedSameImage,
    ToggleBackfaces,
    ToggleEdgeLength,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 18] = [
        Command::AlignZ,
        Command::AlignX,
        Command::AlignY,
        Command::SmartAlignEdges,
        Command::AlignHorizontal,
        Command::AlignViewToNormal,
        Command::QuickCubeMap,
        Command::QuickCubeMapHalf,
        Command::CubeMapModal,
        Command::SnapToMinorGrid,
        Command::GridSnapAxis,
        Command::GridSnapAxisMinor,
        Command::PickImage,
        Command::AssignImage,
        Command::SelectSameImage,
        Command::SelectLinkedSameImage,
        Command::ToggleBackfaces,
        Command::ToggleEdgeLength,
    ];

    /// The menu accelerator key.
    #[must_use]
    pub fn hotkey(self) -> char {
        match self {
            Command::AlignZ => 'Z',
            Command::AlignX => 'X',
            Command::AlignY => 'Y',
            Command::SmartAlignEdges => 'E',
            Command::AlignHorizontal => 'H',
            Command::AlignViewToNormal => 'N',
            Command::QuickCubeMap => 'Q',
            Command::QuickCubeMapHalf => 'W',
            Command::CubeMapModal => 'R',
            Command::SnapToMinorGrid => 'S',
            Command::GridSnapAxis => 'G',
            Command::GridSnapAxisMinor => 'M',
            Command::PickImage => 'P',
            Command::AssignImage => 'T',
            Command::SelectSameImage => 'A',
            Command::SelectLinkedSameImage => 'F',
            Command::ToggleBackfaces => 'B',
            Command::ToggleEdgeLength => 'L',
        }
    }

    /// Looks up a command by its accelerator, case-insensitively.
    #[must_use]
    pub fn from_hotkey(key: char) -> Option<Self> {
        let key = key.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.hotkey() == key)
    }

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Command::AlignZ => "Align to Active on Z Axis",
            Command::AlignX => "Align to Active on X Axis",
            Command::AlignY => "Align to Active on Y Axis",
            Command::SmartAlignEdges => "Smart Align Edges",
            Command::AlignHorizontal => "Align to Active on Both Horizontal Axes",
            Command::AlignViewToNormal => "Align View to Active Face Normal",
            Command::QuickCubeMap => "Quick Cubeprojection Unwrap",
            Command::QuickCubeMapHalf => "Quick Cubeprojection Unwrap at Half Scale",
            Command::CubeMapModal => "Quick Cubemap Modal",
            Command::SnapToMinorGrid => "Snap to Minor Grid",
            Command::GridSnapAxis => "Snap to Grid Along Axis",
            Command::GridSnapAxisMinor => "Snap to Minor Grid Along Axis",
            Command::PickImage => "Pick and Store Image",
            Command::AssignImage => "Assign Stored Image",
            Command::SelectSameImage => "Select Faces With Same Image",
            Command::SelectLinkedSameImage => "Select Linked Faces With Same Image",
            Command::ToggleBackfaces => "Toggle Show Backfaces",
            Command::ToggleEdgeLength => "Toggle Show Length of Edges",
        }
    }

    /// Returns `true` if the command waits for a key press before acting.
    #[must_use]
    pub fn is_modal(self) -> bool {
        matches!(
            self,
            Command::CubeMapModal
                | Command::GridSnapAxis
                | Command::GridSnapAxisMinor
                | Command::PickImage
                | Command::AssignImage
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hotkey(), self.label())
    }
}
