//! Utility functions for formatting analysis results
//!
//! Provides text renderings of samples, spectra and coefficients that are
//! used by client applications.

use crate::coefficients::FourierCoefficients;
use crate::processor::FourierProcessor;
use crate::sampler::SamplePoints;
use crate::spectrum::Spectrum;

/// Format a value compactly, keeping non-finite values readable
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "inf" } else { "-inf" }).to_string()
    } else if value != 0.0 && (value.abs() >= 1e6 || value.abs() < 1e-4) {
        format!("{:.4e}", value)
    } else {
        format!("{:.6}", value)
    }
}

/// Format an angle as a multiple of π when it is one
pub fn format_angle(radians: f64) -> String {
    let turns = radians / std::f64::consts::PI;
    if (turns - turns.round()).abs() < 1e-9 {
        match turns.round() as i64 {
            0 => "0".to_string(),
            1 => "π".to_string(),
            -1 => "-π".to_string(),
            n => format!("{}π", n),
        }
    } else {
        format!("{:.4}", radians)
    }
}

/// Table of sample positions and real values
pub fn format_points(points: &SamplePoints) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>6}  {:>14}  {:>14}\n", "j", "x", "y"));
    for (j, (x, y)) in points.x.iter().zip(&points.y).enumerate() {
        out.push_str(&format!(
            "{:>6}  {:>14}  {:>14}\n",
            j,
            format_angle(*x),
            format_value(y.re)
        ));
    }
    out
}

/// Table of spectrum bins with magnitude and phase
pub fn format_spectrum(spectrum: &Spectrum) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>6}  {:>14}  {:>14}  {:>14}  {:>10}\n",
        "bin", "re", "im", "magnitude", "phase"
    ));
    let magnitudes = spectrum.magnitudes();
    let phases = spectrum.phases();
    for (bin, c) in spectrum.bins().iter().enumerate() {
        out.push_str(&format!(
            "{:>6}  {:>14}  {:>14}  {:>14}  {:>10}\n",
            bin,
            format_value(c.re),
            format_value(c.im),
            format_value(magnitudes[bin]),
            format!("{:.4}", phases[bin])
        ));
    }
    out
}

/// Table of a[k], b[k] per harmonic
pub fn format_coefficients(coeffs: &FourierCoefficients) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>6}  {:>14}  {:>14}\n", "k", "a[k]", "b[k]"));
    for k in 0..=coeffs.degree() {
        let b = match coeffs.b().get(k) {
            Some(b) => format_value(*b),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "{:>6}  {:>14}  {:>14}\n",
            k,
            format_value(coeffs.a()[k]),
            b
        ));
    }
    out
}

/// Render the series as a readable formula, skipping terms below `threshold`
pub fn series_formula(coeffs: &FourierCoefficients, threshold: f64) -> String {
    let m = coeffs.degree();
    let mut terms = Vec::new();

    let constant = coeffs.a()[0] / 2.0;
    if constant.abs() >= threshold {
        terms.push(format!("{:.4}", constant));
    }
    for k in 1..=m {
        // Nyquist term enters halved
        let a = if k == m { coeffs.a()[k] / 2.0 } else { coeffs.a()[k] };
        let b = if k == m { 0.0 } else { coeffs.b()[k] };
        let harmonic = if k == 1 { "x".to_string() } else { format!("{}x", k) };
        if a.abs() >= threshold {
            terms.push(format!("{:.4}·cos({})", a, harmonic));
        }
        if b.abs() >= threshold {
            terms.push(format!("{:.4}·sin({})", b, harmonic));
        }
    }

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ").replace("+ -", "- ")
    }
}

/// Get analysis summary string for a FourierProcessor
pub fn analysis_summary(processor: &FourierProcessor) -> String {
    let mut summary = String::new();
    let config = processor.config();

    summary.push_str("Configuration:\n");
    summary.push_str(&format!("  Transform size: {}\n", config.size));
    summary.push_str(&format!("  Series degree: {}\n", config.degree()));
    summary.push_str(&format!("  Plot points: {}\n", config.plot_points));

    if let Some(expr) = processor.expression() {
        summary.push_str(&format!("Function: f(x) = {}\n", expr));
    }

    if let Some(analysis) = processor.analysis() {
        let coeffs = &analysis.coefficients;
        summary.push_str("Analysis:\n");
        summary.push_str(&format!(
            "  Mean value: {}\n",
            format_value(coeffs.a()[0] / 2.0)
        ));

        let dominant = (1..=coeffs.degree())
            .filter_map(|k| coeffs.amplitude(k).map(|amp| (k, amp)))
            .filter(|(_, amp)| amp.is_finite())
            .max_by(|(_, x), (_, y)| x.total_cmp(y));
        if let Some((k, amp)) = dominant {
            summary.push_str(&format!(
                "  Dominant harmonic: k = {} (amplitude {})\n",
                k,
                format_value(amp)
            ));
        }

        summary.push_str(&format!(
            "  Conjugate symmetric spectrum: {}\n",
            if analysis.spectrum.is_conjugate_symmetric(1e-9) {
                "Yes"
            } else {
                "No"
            }
        ));
        summary.push_str(&format!(
            "  Max error at samples: {}\n",
            format_value(analysis.max_sample_error())
        ));
    }

    summary
}

/// Example periodic functions
pub mod presets {
    /// Preset information structure
    pub struct PresetInfo {
        pub id: usize,
        pub name: &'static str,
        pub expression: &'static str,
        pub description: &'static str,
    }

    /// List all presets with detailed info
    pub fn list_presets() -> Vec<PresetInfo> {
        vec![
            PresetInfo {
                id: 0,
                name: "Ramp",
                expression: "pi*(pi-x)",
                description: "π(π - x), linear ramp with a jump at ±π",
            },
            PresetInfo {
                id: 1,
                name: "Sawtooth",
                expression: "x",
                description: "Odd function, sine terms only",
            },
            PresetInfo {
                id: 2,
                name: "Triangle",
                expression: "|x|",
                description: "Even function, cosine terms only",
            },
            PresetInfo {
                id: 3,
                name: "Square",
                expression: "sign(x)",
                description: "Odd harmonics decaying as 1/k",
            },
            PresetInfo {
                id: 4,
                name: "Quadratic",
                expression: "x^2",
                description: "Continuous periodic extension, 1/k² decay",
            },
            PresetInfo {
                id: 5,
                name: "Rectified sine",
                expression: "|sin(x)|",
                description: "Even harmonics only",
            },
            PresetInfo {
                id: 6,
                name: "Smooth",
                expression: "exp(sin(x))",
                description: "Analytic, spectrum decays faster than any power",
            },
        ]
    }

    /// Get a preset by ID
    pub fn get_preset(id: usize) -> Option<PresetInfo> {
        list_presets().into_iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;
    use std::f64::consts::PI;

    #[test]
    fn test_value_formatting() {
        assert_eq!(format_value(1.5), "1.500000");
        assert_eq!(format_value(0.0), "0.000000");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_value(1.0e-7), "1.0000e-7");
    }

    #[test]
    fn test_angle_formatting() {
        assert_eq!(format_angle(0.0), "0");
        assert_eq!(format_angle(PI), "π");
        assert_eq!(format_angle(-PI), "-π");
        assert_eq!(format_angle(2.0 * PI), "2π");
        assert_eq!(format_angle(1.0), "1.0000");
    }

    #[test]
    fn test_coefficient_table_has_row_per_harmonic() {
        let coeffs = FourierCoefficients::new(vec![1.0, 2.0, 3.0], vec![0.0, 4.0]).unwrap();
        let table = format_coefficients(&coeffs);
        // header + k = 0..=2
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().last().unwrap().trim_end().ends_with('-'));
    }

    #[test]
    fn test_series_formula() {
        let coeffs =
            FourierCoefficients::new(vec![2.0, 0.0, -3.0, 0.0], vec![0.0, 1.5, 0.0]).unwrap();
        assert_eq!(
            series_formula(&coeffs, 1e-9),
            "1.0000 + 1.5000·sin(x) - 3.0000·cos(2x)"
        );

        let zero = FourierCoefficients::new(vec![0.0, 0.0], vec![0.0]).unwrap();
        assert_eq!(series_formula(&zero, 1e-9), "0");
    }

    #[test]
    fn test_presets_parse() {
        let presets = presets::list_presets();
        assert_eq!(presets.len(), 7);

        for preset in presets {
            assert!(
                Expression::parse(preset.expression).is_ok(),
                "preset {} does not parse",
                preset.name
            );
        }
        assert_eq!(presets::get_preset(2).unwrap().expression, "|x|");
        assert!(presets::get_preset(99).is_none());
    }

    #[test]
    fn test_summary() {
        let mut processor = FourierProcessor::new().unwrap();
        let empty = analysis_summary(&processor);
        assert!(empty.contains("Transform size: 16"));
        assert!(!empty.contains("Analysis:"));

        processor.set_expression("3cos(2x)").unwrap();
        let summary = analysis_summary(&processor);
        assert!(summary.contains("Function: f(x) = 3cos(2x)"));
        assert!(summary.contains("Dominant harmonic: k = 2"));
        assert!(summary.contains("Conjugate symmetric spectrum: Yes"));
    }
}
