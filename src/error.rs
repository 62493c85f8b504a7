// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    InvalidColorFormat(String), // A color string is not 6 hex digits
    EmptyHistory,               // current() called before the first push
    ImageLoad(String),          // Decoding the input image failed
    ImageSave(String),          // Encoding/writing the output image failed
    WindowInit(String),         // Creating the window failed
    WindowUpdate(String),       // Updating the window buffer failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColorFormat(s) => write!(f, "Invalid color format: {s}"),
            Error::EmptyHistory => write!(f, "History is empty: nothing was ever pushed"),
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
            Error::ImageSave(s) => write!(f, "Image save error: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
