//! Line access to survey data files, plain or gzip-compressed.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::{Result, SurveyError};

const GZIP_SUFFIX: &str = "gz";

pub fn is_gzip(path: &Path) -> bool {
    //! Compression is decided by file name alone.

    path.to_string_lossy().ends_with(GZIP_SUFFIX)
}

/// Reads a data file one raw line at a time, without the line terminator.
///
/// Lines are returned as bytes so that text in an unexpected encoding only
/// spoils the columns it touches.
pub struct LineSource {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    line: usize,
}

impl LineSource {
    pub fn open(path: impl AsRef<Path>) -> Result<LineSource> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| SurveyError::Open {
            path: path.clone(),
            source,
        })?;

        let gzip = is_gzip(&path);
        debug!("opened {} (gzip: {})", path.display(), gzip);

        let reader: Box<dyn Read> = if gzip {
            Box::new(MultiGzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Ok(LineSource {
            path,
            reader: Box::new(BufReader::new(reader)),
            line: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        //! Read the next line.
        //!
        //! Returns `Ok(None)` at end of file.

        let mut buffer = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buffer)
            .map_err(|source| SurveyError::Read {
                path: self.path.clone(),
                line: self.line + 1,
                source,
            })?;

        if read == 0 {
            return Ok(None);
        }

        self.line += 1;
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }

        Ok(Some(buffer))
    }
}

impl Iterator for LineSource {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
