mod align_to_active;
mod smart_edges;
mod snap_target;

pub use align_to_active::{AlignHorizontal, AlignToActive};
pub use smart_edges::{long_axis, SmartAlignEdges};
pub use snap_target::SnapTarget;
