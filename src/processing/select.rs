//! Column projection for [`crate::types::Frame`].

use crate::error::FrameResult;
use crate::types::Frame;

/// Returns a new [`Frame`] holding only the named columns.
///
/// The output columns alias the source columns (no values are copied). Fails with
/// [`crate::FrameError::ColumnNotFound`] on the first name that is not present. A repeated name
/// simply overwrites itself.
pub fn select<S: AsRef<str>>(frame: &Frame, names: &[S]) -> FrameResult<Frame> {
    let mut out = Frame::new();
    for name in names {
        let name = name.as_ref();
        let column = frame.column(name)?;
        out.add_column(name, column.clone());
    }
    Ok(out)
}
