use crate::error::TGError;
use std::fs::File;
use std::io::{BufReader, BufWriter};

pub fn get_buf_reader(file_path: &str) -> Result<BufReader<File>, TGError> {
    Ok(BufReader::new(
        File::open(file_path).map_err(|e| TGError::ReadFile(file_path.to_owned(), e.to_string()))?,
    ))
}

pub fn get_buf_writer(file_path: &str) -> Result<BufWriter<File>, TGError> {
    Ok(BufWriter::new(
        File::create(file_path)
            .map_err(|e| TGError::CreateFile(file_path.to_owned(), e.to_string()))?,
    ))
}
