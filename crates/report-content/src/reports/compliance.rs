//! Compliance report: overall score, COSO component breakdown, recommendations

use shared_types::{ComplianceMetrics, ScoreLabel};

use crate::sections::{format_number, SectionWriter};

pub fn write_compliance(out: &mut SectionWriter<'_>, metrics: &ComplianceMetrics) {
    let m = metrics.resolve();
    let badge = out.t(ScoreLabel::badge_for(Some(m.overall_score)).translation_key());
    let not_available = out.t("common.not_available");

    out.section("section.executive_summary");
    out.line_key("compliance.summary", &[]);
    let overall = format_number(m.overall_score);
    let assessments = format_number(m.assessments_completed);
    let last_date = m
        .last_assessment_date
        .as_deref()
        .unwrap_or(not_available.as_str());
    out.line_key(
        "compliance.overall_score",
        &[("score", overall.as_str()), ("label", badge.as_str())],
    );
    out.line_key("compliance.assessments_completed", &[("count", assessments.as_str())]);
    out.line_key("compliance.last_assessment", &[("date", last_date)]);

    out.section("section.component_analysis");
    for (i, (component, score)) in m.component_scores.iter().enumerate() {
        let label = out.t(ScoreLabel::from_score(*score).translation_key());
        let name = out.t(&component.label_key());
        let index = (i + 1).to_string();
        let value = format_number(score.unwrap_or(0.0));
        out.line_key(
            "compliance.component_line",
            &[
                ("index", index.as_str()),
                ("component", name.as_str()),
                ("score", value.as_str()),
                ("label", label.as_str()),
            ],
        );
    }

    out.section("section.recommendations");
    out.list_or_empty(&m.recommendations, "compliance.no_recommendations");

    out.section("section.next_steps");
    out.list_keys(&[
        "compliance.next_step.1",
        "compliance.next_step.2",
        "compliance.next_step.3",
    ]);

    out.section("section.conclusion");
    out.line_key("compliance.conclusion", &[("label", badge.as_str())]);
}
