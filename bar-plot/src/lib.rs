#[macro_use]
extern crate log;

mod convert;
mod error;
mod export;
mod figure;
mod hbar;
mod table;

pub use convert::{ms_to_hours, MS_PER_HOUR};
pub use error::{Error, Result};
pub use export::save_figure;
pub use figure::Figure;
pub use hbar::{hbar_plot, HbarOptions};
pub use table::{Table, Value};
