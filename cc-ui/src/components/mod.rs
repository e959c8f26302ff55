//! RSX components for the regions of the countdown page.

mod chooser;
mod clock_face;
mod clock_header;
mod description;
mod find_out_more;

pub use chooser::Chooser;
pub use clock_face::ClockFace;
pub use clock_header::ClockHeader;
pub use description::Description;
pub use find_out_more::FindOutMore;
