//! Risk assessment report

use shared_types::RiskMetrics;

use crate::sections::{format_number, format_rate, SectionWriter};

pub fn write_risk(out: &mut SectionWriter<'_>, metrics: &RiskMetrics) {
    let m = metrics.resolve();
    let score = format_rate(out.translator(), m.overall_risk_score);
    let total = format_number(m.total_risks);
    let high = format_number(m.high_risks);
    let medium = format_number(m.medium_risks);
    let low = format_number(m.low_risks);
    let mitigated = format_number(m.mitigated_risks);

    out.section("section.executive_summary");
    out.line_key("risk.summary", &[]);

    out.section("section.risk_profile");
    out.line_key("risk.overall_score", &[("score", score.as_str())]);
    out.line_key("risk.total", &[("count", total.as_str())]);
    out.line_key("risk.high", &[("count", high.as_str())]);
    out.line_key("risk.medium", &[("count", medium.as_str())]);
    out.line_key("risk.low", &[("count", low.as_str())]);
    out.line_key("risk.mitigated", &[("count", mitigated.as_str())]);

    out.section("section.high_risk_areas");
    out.list_or_empty(&m.high_risk_areas, "risk.no_high_risk_areas");

    out.section("section.mitigation");
    out.list_keys(&["risk.mitigation.1", "risk.mitigation.2", "risk.mitigation.3"]);

    out.section("section.conclusion");
    out.line_key("risk.conclusion", &[("high", high.as_str())]);
}
