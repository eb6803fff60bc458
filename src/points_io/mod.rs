//! Reading, writing and synthesizing point lists
//!
//! Point files hold one `(x,y)` tuple per line. Result files hold one
//! `distance, (x1,y1), (x2,y2)` line per selected pair.

pub use self::generate::generate_points;
pub use self::input::{load_points, read_points};
pub use self::output::{save_pairs, save_points, write_pairs, write_points};

pub(crate) mod generate;
pub(crate) mod input;
pub(crate) mod output;
