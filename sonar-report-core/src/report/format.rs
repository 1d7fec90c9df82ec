use crate::config::constants::sheet;
use crate::sonar::models::ComponentMeasures;

/// Two decimals, comma as the decimal separator, trailing `%`
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%").replacen('.', ",", 1)
}

/// Formatted percentage for `metric`, or the placeholder dash when absent
pub fn percent_cell(measures: &ComponentMeasures, metric: &str) -> String {
    measures
        .measure(metric)
        .and_then(|measure| measure.numeric())
        .map(format_percent)
        .unwrap_or_else(|| sheet::MISSING_VALUE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sonar::models::Measure;

    #[test]
    fn uses_comma_and_two_decimals() {
        assert_eq!(format_percent(84.5), "84,50%");
        assert_eq!(format_percent(5.0), "5,00%");
        assert_eq!(format_percent(100.0), "100,00%");
    }

    #[test]
    fn absent_metric_is_a_dash() {
        let measures = ComponentMeasures {
            measures: vec![Measure::new("coverage", "84.5")],
            ..ComponentMeasures::default()
        };
        assert_eq!(percent_cell(&measures, "coverage"), "84,50%");
        assert_eq!(percent_cell(&measures, "duplicated_lines_density"), "-");
    }

    #[test]
    fn unparseable_metric_is_a_dash() {
        let measures = ComponentMeasures {
            measures: vec![Measure::new("coverage", "")],
            ..ComponentMeasures::default()
        };
        assert_eq!(percent_cell(&measures, "coverage"), "-");
    }
}
