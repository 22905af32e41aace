//! Stack frame filtering
//!
//! Compiles a user-supplied pattern into a [`FrameMatcher`] that decides,
//! for each captured frame, whether it is of interest. A pattern selects one
//! of three matching modes from its shape:
//!
//! - `file.py::Class::method` or `file.py::name`: qualified match, the file
//!   path must end with the first component and the function name must
//!   contain the rest
//! - `services/user.py` or `models.py`: path suffix match on the file name
//! - anything else: case-insensitive substring match on file or function name
//!
//! An absent or empty pattern compiles to `None`, meaning no filtering.

pub mod frame;
pub mod matcher;
pub mod pattern;
pub mod stack;

pub use frame::FrameInfo;
pub use matcher::FrameMatcher;
pub use pattern::{compile, compile_with, FilterOptions, Mode, DEFAULT_SOURCE_EXTENSIONS};
pub use stack::stack_matches;
