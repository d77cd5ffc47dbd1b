pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod keymap;
pub mod ranges;
pub mod scorer;
pub mod search;
pub mod sheet;
pub mod transposer;
// cmd and reports are modules of the binary crate (main.rs).

pub use error::{VpError, VpResult};
pub use search::{find_best_offsets, SearchResult, SearchWindow};
pub use transposer::{transpose, KeyRange, OobPolicy, Transposer};
