//! Data model and wire-format parsers for 2channel-style text boards:
//! the `subject.txt` thread index, per-thread `.dat` files and the
//! per-board `SETTING.TXT` table, all as served by legacy BBS backends.

pub mod board;
pub mod error;
pub mod index;
pub mod post;
pub mod utils;
