//! Internal-control performance report

use shared_types::PerformanceMetrics;

use crate::sections::{format_number, format_rate, SectionWriter};

pub fn write_performance(out: &mut SectionWriter<'_>, metrics: &PerformanceMetrics) {
    let m = metrics.resolve();
    let effectiveness = format_rate(out.translator(), m.control_effectiveness);
    let assessments = format_number(m.assessments_completed);
    let documents = format_number(m.documents_uploaded);
    let days = format_number(m.average_response_days);
    let met = format_number(m.objectives_met);
    let total = format_number(m.objectives_total);

    out.section("section.executive_summary");
    out.line_key("performance.summary", &[]);

    out.section("section.performance_metrics");
    out.line_key("performance.effectiveness", &[("rate", effectiveness.as_str())]);
    out.line_key("performance.assessments", &[("count", assessments.as_str())]);
    out.line_key("performance.documents", &[("count", documents.as_str())]);
    out.line_key("performance.response_days", &[("days", days.as_str())]);
    out.line_key(
        "performance.objectives",
        &[("met", met.as_str()), ("total", total.as_str())],
    );

    out.section("section.improvement_areas");
    out.list_or_empty(&m.improvement_areas, "performance.no_improvement_areas");

    out.section("section.next_steps");
    out.list_keys(&[
        "performance.next_step.1",
        "performance.next_step.2",
        "performance.next_step.3",
    ]);

    out.section("section.conclusion");
    out.line_key("performance.conclusion", &[("rate", effectiveness.as_str())]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_types::{Catalog, Locale};

    #[test]
    fn test_objectives_and_effectiveness() {
        let metrics: PerformanceMetrics = serde_json::from_value(json!({
            "controlEffectiveness": 81.4,
            "objectivesMet": 7,
            "objectivesTotal": 10,
            "improvementAreas": ["Segregation of duties"]
        }))
        .unwrap();
        let catalog = Catalog::new(Locale::En);
        let mut out = SectionWriter::new(&catalog);
        write_performance(&mut out, &metrics);
        let lines = out.finish();

        assert!(lines.contains(&"Control effectiveness: 81.4%".to_string()));
        assert!(lines.contains(&"Control objectives met: 7 of 10".to_string()));
        assert!(lines.contains(&"1. Segregation of duties".to_string()));
    }

    #[test]
    fn test_empty_metrics() {
        let catalog = Catalog::new(Locale::En);
        let mut out = SectionWriter::new(&catalog);
        write_performance(&mut out, &PerformanceMetrics::default());
        let lines = out.finish();

        assert!(lines.contains(&"Control effectiveness: Not Available".to_string()));
        assert!(lines.contains(&"No areas for improvement have been identified.".to_string()));
        assert!(lines.contains(&"Average response time: 0 days".to_string()));
    }
}
