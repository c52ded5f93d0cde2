//! Choosing which series a front end renders.

use crate::session::SignalTriple;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Plot layouts offered by a display picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Nothing is drawn.
    Hidden,
    /// Clean, noisy and filtered on one panel.
    #[default]
    AllInOne,
    /// One panel per series.
    Separate,
    CleanFiltered,
    CleanNoisy,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 5] = [
        DisplayMode::Hidden,
        DisplayMode::AllInOne,
        DisplayMode::Separate,
        DisplayMode::CleanFiltered,
        DisplayMode::CleanNoisy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Hidden => "-",
            DisplayMode::AllInOne => "all_in_one",
            DisplayMode::Separate => "separate",
            DisplayMode::CleanFiltered => "clean_filtered",
            DisplayMode::CleanNoisy => "clean_noisy",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.label() == trimmed)
            .ok_or_else(|| Error::UnknownDisplayMode {
                name: name.to_string(),
            })
    }
}

/// One named series and the panel it belongs on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace<'a> {
    pub name: &'static str,
    pub panel: usize,
    pub values: &'a [f64],
}

/// Which optional series a single-panel plot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceVisibility {
    pub show_noisy: bool,
    pub show_filtered: bool,
}

impl Default for TraceVisibility {
    fn default() -> Self {
        Self {
            show_noisy: true,
            show_filtered: true,
        }
    }
}

impl SignalTriple {
    /// The series `mode` renders, in drawing order.
    ///
    /// Single-panel modes put every trace on panel 0; `Separate` gives each
    /// series its own panel.
    pub fn traces(&self, mode: DisplayMode) -> Vec<Trace<'_>> {
        let clean = ("Clean", self.clean.as_slice());
        let noisy = ("Noisy", self.noisy.as_slice());
        let filtered = ("Filtered", self.filtered.as_slice());

        let (series, one_panel_each) = match mode {
            DisplayMode::Hidden => (vec![], false),
            DisplayMode::AllInOne => (vec![clean, noisy, filtered], false),
            DisplayMode::Separate => (vec![clean, noisy, filtered], true),
            DisplayMode::CleanFiltered => (vec![clean, filtered], false),
            DisplayMode::CleanNoisy => (vec![clean, noisy], false),
        };

        series
            .into_iter()
            .enumerate()
            .map(|(i, (name, values))| Trace {
                name,
                panel: if one_panel_each { i } else { 0 },
                values,
            })
            .collect()
    }

    /// Copy with hidden series replaced by NaN so plots keep their x-axis.
    pub fn masked(&self, visibility: TraceVisibility) -> SignalTriple {
        let keep = |show: bool, values: &[f64]| {
            if show {
                values.to_vec()
            } else {
                vec![f64::NAN; values.len()]
            }
        };
        SignalTriple {
            clean: self.clean.clone(),
            noisy: keep(visibility.show_noisy, &self.noisy),
            filtered: keep(visibility.show_filtered, &self.filtered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple() -> SignalTriple {
        SignalTriple {
            clean: vec![0.0, 1.0],
            noisy: vec![0.1, 0.9],
            filtered: vec![0.05, 0.95],
        }
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("-".parse::<DisplayMode>(), Ok(DisplayMode::Hidden));
        assert_eq!("separate".parse::<DisplayMode>(), Ok(DisplayMode::Separate));
        for mode in DisplayMode::ALL {
            assert_eq!(mode.to_string().parse::<DisplayMode>(), Ok(mode));
        }
        assert!(matches!(
            "sideways".parse::<DisplayMode>(),
            Err(Error::UnknownDisplayMode { .. })
        ));
    }

    #[test]
    fn test_hidden_has_no_traces() {
        assert!(triple().traces(DisplayMode::Hidden).is_empty());
    }

    #[test]
    fn test_single_panel_modes() {
        let t = triple();
        let traces = t.traces(DisplayMode::CleanFiltered);
        let names: Vec<_> = traces.iter().map(|tr| tr.name).collect();
        assert_eq!(names, vec!["Clean", "Filtered"]);
        assert!(traces.iter().all(|tr| tr.panel == 0));
        assert_eq!(traces[1].values, &[0.05, 0.95]);

        let names: Vec<_> = t.traces(DisplayMode::CleanNoisy).iter().map(|tr| tr.name).collect();
        assert_eq!(names, vec!["Clean", "Noisy"]);
        assert_eq!(t.traces(DisplayMode::AllInOne).len(), 3);
    }

    #[test]
    fn test_separate_uses_one_panel_per_series() {
        let t = triple();
        let panels: Vec<_> = t.traces(DisplayMode::Separate).iter().map(|tr| tr.panel).collect();
        assert_eq!(panels, vec![0, 1, 2]);
    }

    #[test]
    fn test_masked_hides_series() {
        let masked = triple().masked(TraceVisibility {
            show_noisy: false,
            show_filtered: true,
        });
        assert_eq!(masked.clean, vec![0.0, 1.0]);
        assert_eq!(masked.noisy.len(), 2);
        assert!(masked.noisy.iter().all(|v| v.is_nan()));
        assert_eq!(masked.filtered, vec![0.05, 0.95]);
    }
}
