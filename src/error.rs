use std::fmt;
use log::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    // None of the candidate file names for a library could be opened.
    LibraryOpen { library: &'static str, tried: Vec<String>, source: Option<libloading::Error> },
    // A symbol the library cannot be used without is missing.
    MissingSymbol { symbol: String, library: &'static str },
    // The driver returned a version string we can't read.
    BadVersion(String),
    // No candidate of an entry point had its precondition met.
    NoProvider { entry_point: &'static str, tried: Vec<String> },
    // The question needs a current context and there is none.
    NoContext,
    InvalidName(std::ffi::NulError),
}

impl From<std::ffi::NulError> for Error {
    fn from(e: std::ffi::NulError) -> Self {
        return Error::InvalidName(e);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LibraryOpen { library, tried, source } => {
                write!(f, "Couldn't open {} (tried {})", library, tried.join(", "))?;
                if let Some(e) = source {
                    write!(f, ": {}", e)?;
                }
                Ok(())
            }
            Error::MissingSymbol { symbol, library } => {
                write!(f, "{} is missing required symbol {}", library, symbol)
            }
            Error::BadVersion(s) => write!(f, "Unable to interpret version string: {}", s),
            Error::NoProvider { entry_point, tried } => {
                writeln!(f, "No provider of {} found.  Requires one of:", entry_point)?;
                if tried.is_empty() {
                    write!(f, "    No known providers.  This is likely a bug in the entry point table")?;
                }
                for name in tried {
                    writeln!(f, "    {}", name)?;
                }
                Ok(())
            }
            Error::NoContext => write!(f, "No context is current on this thread"),
            Error::InvalidName(e) => write!(f, "Symbol name contains a NUL byte: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        return match self {
            Error::LibraryOpen { source: Some(e), .. } => Some(e),
            Error::InvalidName(e) => Some(e),
            _ => None,
        };
    }
}

// Deployment errors have no recovery path: report and abort.
pub fn fatal(err: Error) -> ! {
    error!("{}", err);
    eprintln!("lazygl: {}", err);
    std::process::abort();
}

// Unwrap a result whose error can only mean a broken environment.
pub fn or_fatal<T>(res: Result<T>) -> T {
    return match res {
        Ok(v) => v,
        Err(e) => fatal(e),
    };
}
