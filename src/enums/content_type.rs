use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Movie,
    TvShow,
}

impl ContentType {
    #[doc = "Label as it appears in the source table and on chart legends"]
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Movie" => Ok(ContentType::Movie),
            "TV Show" => Ok(ContentType::TvShow),
            other => Err(anyhow!("[ContentType->from_str] Unknown content type '{}'", other)),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_labels() {
        assert_eq!("Movie".parse::<ContentType>().unwrap(), ContentType::Movie);
        assert_eq!(" TV Show ".parse::<ContentType>().unwrap(), ContentType::TvShow);
        assert!("Podcast".parse::<ContentType>().is_err());
    }
}
