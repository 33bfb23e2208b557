use std::path::PathBuf;

use crate::error::ExtractError;

/// The opcode matrix this tool was written against.
pub const DEFAULT_URL: &str = "http://www.oxyron.de/html/opcodes02.html";

/// Where the page comes from. URLs get a single blocking GET; anything
/// else is treated as a path to a saved copy, which is what the tests
/// use and what makes offline runs possible.
#[derive(Debug, Clone)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub fn from_arg(arg: &str) -> Source {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Source::Url(arg.to_string())
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    pub fn load(&self) -> Result<String, ExtractError> {
        match self {
            Source::Url(url) => {
                log::info!("Fetching {}", url);
                let response = ureq::get(url).call().map_err(|e| ExtractError::Fetch {
                    url: url.clone(),
                    source: Box::new(e),
                })?;
                let body = response.into_string()?;
                log::info!("Fetched {} bytes", body.len());
                Ok(body)
            }
            Source::File(path) => {
                log::info!("Reading {}", path.display());
                std::fs::read_to_string(path).map_err(|e| ExtractError::ReadFile {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Source;

    #[test]
    fn urls_and_paths_are_told_apart() {
        assert!(matches!(
            Source::from_arg("http://www.oxyron.de/html/opcodes02.html"),
            Source::Url(_)
        ));
        assert!(matches!(
            Source::from_arg("https://example.com/opcodes02.html"),
            Source::Url(_)
        ));
        assert!(matches!(Source::from_arg("./opcodes02.html"), Source::File(_)));
        assert!(matches!(Source::from_arg("page.html"), Source::File(_)));
    }
}
