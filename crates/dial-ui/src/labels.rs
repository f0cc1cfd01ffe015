use std::fmt;

/// Number of hour labels on the dial.
pub const LABEL_COUNT: usize = 12;

/// Error returned by [`ClockLabels::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The sequence did not contain exactly twelve labels.
    WrongCount { found: usize },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::WrongCount { found } => {
                write!(f, "expected {LABEL_COUNT} clock labels, got {found}")
            }
        }
    }
}

impl std::error::Error for LabelError {}

/// The twelve hour labels, clockwise starting at 12 o'clock.
///
/// Always exactly [`LABEL_COUNT`] entries; short or long sequences are
/// rejected at construction rather than partially drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockLabels([String; LABEL_COUNT]);

impl ClockLabels {
    pub fn new<I, S>(labels: I) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let found = labels.len();
        <[String; LABEL_COUNT]>::try_from(labels)
            .map(Self)
            .map_err(|_| LabelError::WrongCount { found })
    }

    /// "12", "1", …, "11".
    pub fn arabic() -> Self {
        Self(std::array::from_fn(|i| if i == 0 { "12".to_owned() } else { i.to_string() }))
    }

    /// "XII", "I", …, "XI".
    pub fn roman() -> Self {
        const ROMAN: [&str; LABEL_COUNT] =
            ["XII", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI"];
        Self(ROMAN.map(str::to_owned))
    }

    /// Label at clockwise position `index` (0 = 12 o'clock).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arabic_starts_at_twelve() {
        let labels = ClockLabels::arabic();
        let all: Vec<_> = labels.iter().collect();
        assert_eq!(all, ["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]);
    }

    #[test]
    fn roman_quarter_positions() {
        let labels = ClockLabels::roman();
        assert_eq!(labels.get(0), Some("XII"));
        assert_eq!(labels.get(3), Some("III"));
        assert_eq!(labels.get(6), Some("VI"));
        assert_eq!(labels.get(9), Some("IX"));
        assert_eq!(labels.get(12), None);
    }

    #[test]
    fn accepts_exactly_twelve() {
        let labels = ClockLabels::new((0..12).map(|i| format!("h{i}"))).unwrap();
        assert_eq!(labels.get(11), Some("h11"));
    }

    #[test]
    fn rejects_short_sequence() {
        let err = ClockLabels::new(["12", "3", "6", "9"]).unwrap_err();
        assert_eq!(err, LabelError::WrongCount { found: 4 });
        assert_eq!(err.to_string(), "expected 12 clock labels, got 4");
    }

    #[test]
    fn rejects_long_sequence() {
        let err = ClockLabels::new(vec!["x"; 13]).unwrap_err();
        assert_eq!(err, LabelError::WrongCount { found: 13 });
    }
}
