use std::io;

use thiserror::Error;

use crate::TermInt;
use crate::config::ConfigError;
use crate::controller::LayoutError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("could not start logging: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("terminal is {have_w}x{have_h}, the board needs {need_w}x{need_h}")]
    TerminalTooSmall { need_w: TermInt, need_h: TermInt, have_w: TermInt, have_h: TermInt },
}
