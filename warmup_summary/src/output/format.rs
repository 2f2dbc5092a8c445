//!
//! Output report format.
//!

///
/// Output report format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Versioned summary record, the input of later diffs.
    Json,
    /// LaTeX table.
    Latex,
    /// HTML page, with a diff if a previous summary is given.
    Html,
    /// Excel spreadsheet format.
    Xlsx,
    /// Colored terminal report.
    #[default]
    Terminal,
}

impl Format {
    /// All formats.
    pub const ALL: [Self; 5] = [
        Self::Json,
        Self::Latex,
        Self::Html,
        Self::Xlsx,
        Self::Terminal,
    ];
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "latex" | "tex" => Ok(Self::Latex),
            "html" => Ok(Self::Html),
            "xlsx" => Ok(Self::Xlsx),
            "terminal" => Ok(Self::Terminal),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                Self::ALL
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Latex => write!(f, "latex"),
            Format::Html => write!(f, "html"),
            Format::Xlsx => write!(f, "xlsx"),
            Format::Terminal => write!(f, "terminal"),
        }
    }
}
