#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch { observed: u32 },
    Unparseable { raw: String },
}

impl Verdict {
    /// Console line for this verdict; matches are silent.
    pub fn report_line(&self, value: u32) -> Option<String> {
        match self {
            Verdict::Match => None,
            Verdict::Mismatch { .. } => Some("calculated wrongly!".to_string()),
            Verdict::Unparseable { .. } => Some(format!("Number out of range {value}")),
        }
    }
}

pub fn classify(value: u32, line: Option<&str>) -> Verdict {
    let raw = line.unwrap_or("");
    match raw.trim().parse::<u32>() {
        Ok(observed) if observed == value => Verdict::Match,
        Ok(observed) => Verdict::Mismatch { observed },
        Err(_) => Verdict::Unparseable {
            raw: raw.to_string(),
        },
    }
}
