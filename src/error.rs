#[derive(Debug)]
pub enum TGError {
    Generic(String),
    ShapeMismatch(String),
    InvalidWindow(i32, String),
    ReadFile(String, String),
    CreateFile(String, String),
    WriteFile(String, String),
    Parse(String, String),
    Worker(String),
}

impl std::fmt::Display for TGError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TGError::Generic(msg) => write!(f, "[TGError] {}", msg)?,
            TGError::ShapeMismatch(message) => write!(f, "[ShapeError] {}", message)?,
            TGError::InvalidWindow(years, reason) => {
                write!(f, "[WindowError] Invalid window of {} years: {}", years, reason)?;
            }
            TGError::ReadFile(file_path, e) => {
                write!(f, "[IOError] Could not open file '{}' for reading: {}", file_path, e)?;
            }
            TGError::CreateFile(file_path, e) => {
                write!(f, "[IOError] Could not create file '{}' for writing: {}", file_path, e)?;
            }
            TGError::WriteFile(file_path, e) => {
                write!(f, "[IOError] Could not write to '{}': {}", file_path, e)?;
            }
            TGError::Parse(source, message) => {
                write!(f, "[ParseError] Could not parse '{}': {}", source, message)?;
            }
            TGError::Worker(message) => write!(f, "[WorkerError] {}", message)?,
        }
        Ok(())
    }
}

impl std::error::Error for TGError {}
