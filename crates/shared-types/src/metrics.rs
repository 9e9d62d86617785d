//! Per-report-type metrics records
//!
//! Metrics arrive from an external reporting source with any subset of
//! fields present. Every field is optional and deserializes leniently:
//! numbers may be JSON numbers or numeric strings, lists may contain
//! non-string junk, and anything unusable is treated as absent. Scores and
//! rates keep negative values so they still reach the label ladder; a
//! negative count is unusable. Each record
//! has a `resolve()` that applies the defaulting rules and returns a fully
//! populated view for the formatter.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::{CosoComponent, ReportType};

/// Metrics for one report, tagged by report type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reportType", content = "metrics", rename_all = "lowercase")]
pub enum ReportMetrics {
    Compliance(ComplianceMetrics),
    Progress(ProgressMetrics),
    Performance(PerformanceMetrics),
    Risk(RiskMetrics),
}

impl ReportMetrics {
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportMetrics::Compliance(_) => ReportType::Compliance,
            ReportMetrics::Progress(_) => ReportType::Progress,
            ReportMetrics::Performance(_) => ReportType::Performance,
            ReportMetrics::Risk(_) => ReportType::Risk,
        }
    }

    /// Build metrics from an untyped bag; never fails
    ///
    /// A bag that is not a JSON object yields the all-absent record.
    pub fn from_value(report_type: ReportType, value: Value) -> Self {
        match report_type {
            ReportType::Compliance => {
                ReportMetrics::Compliance(serde_json::from_value(value).unwrap_or_default())
            }
            ReportType::Progress => {
                ReportMetrics::Progress(serde_json::from_value(value).unwrap_or_default())
            }
            ReportType::Performance => {
                ReportMetrics::Performance(serde_json::from_value(value).unwrap_or_default())
            }
            ReportType::Risk => {
                ReportMetrics::Risk(serde_json::from_value(value).unwrap_or_default())
            }
        }
    }

    /// Empty metrics for a report type
    pub fn empty(report_type: ReportType) -> Self {
        Self::from_value(report_type, Value::Null)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceMetrics {
    #[serde(deserialize_with = "lenient_number")]
    pub overall_score: Option<f64>,
    #[serde(deserialize_with = "lenient_scores")]
    pub component_scores: HashMap<String, f64>,
    #[serde(deserialize_with = "lenient_strings")]
    pub recommendations: Vec<String>,
    #[serde(deserialize_with = "lenient_count")]
    pub assessments_completed: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub last_assessment_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCompliance {
    pub overall_score: f64,
    /// Score per component, in framework order; `None` when not supplied
    pub component_scores: Vec<(CosoComponent, Option<f64>)>,
    pub recommendations: Vec<String>,
    pub assessments_completed: f64,
    pub last_assessment_date: Option<String>,
}

impl ComplianceMetrics {
    pub fn resolve(&self) -> ResolvedCompliance {
        ResolvedCompliance {
            overall_score: self.overall_score.unwrap_or(0.0),
            component_scores: CosoComponent::ALL
                .iter()
                .map(|c| (*c, self.component_scores.get(c.key()).copied()))
                .collect(),
            recommendations: self.recommendations.clone(),
            assessments_completed: self.assessments_completed.unwrap_or(0.0),
            last_assessment_date: self.last_assessment_date.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressMetrics {
    #[serde(deserialize_with = "lenient_count")]
    pub total_workflows: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub completed_workflows: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub in_progress_workflows: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub pending_workflows: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub completion_rate: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub overdue_tasks: Option<f64>,
    #[serde(deserialize_with = "lenient_strings")]
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProgress {
    pub total_workflows: f64,
    pub completed_workflows: f64,
    pub in_progress_workflows: f64,
    pub pending_workflows: f64,
    /// A rate cannot meaningfully default to zero
    pub completion_rate: Option<f64>,
    pub overdue_tasks: f64,
    pub milestones: Vec<String>,
}

impl ProgressMetrics {
    pub fn resolve(&self) -> ResolvedProgress {
        ResolvedProgress {
            total_workflows: self.total_workflows.unwrap_or(0.0),
            completed_workflows: self.completed_workflows.unwrap_or(0.0),
            in_progress_workflows: self.in_progress_workflows.unwrap_or(0.0),
            pending_workflows: self.pending_workflows.unwrap_or(0.0),
            completion_rate: self.completion_rate,
            overdue_tasks: self.overdue_tasks.unwrap_or(0.0),
            milestones: self.milestones.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceMetrics {
    #[serde(deserialize_with = "lenient_number")]
    pub control_effectiveness: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub assessments_completed: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub documents_uploaded: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub average_response_days: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub objectives_met: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub objectives_total: Option<f64>,
    #[serde(deserialize_with = "lenient_strings")]
    pub improvement_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPerformance {
    pub control_effectiveness: Option<f64>,
    pub assessments_completed: f64,
    pub documents_uploaded: f64,
    pub average_response_days: f64,
    pub objectives_met: f64,
    pub objectives_total: f64,
    pub improvement_areas: Vec<String>,
}

impl PerformanceMetrics {
    pub fn resolve(&self) -> ResolvedPerformance {
        ResolvedPerformance {
            control_effectiveness: self.control_effectiveness,
            assessments_completed: self.assessments_completed.unwrap_or(0.0),
            documents_uploaded: self.documents_uploaded.unwrap_or(0.0),
            average_response_days: self.average_response_days.unwrap_or(0.0),
            objectives_met: self.objectives_met.unwrap_or(0.0),
            objectives_total: self.objectives_total.unwrap_or(0.0),
            improvement_areas: self.improvement_areas.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskMetrics {
    #[serde(deserialize_with = "lenient_number")]
    pub overall_risk_score: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub total_risks: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub high_risks: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub medium_risks: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub low_risks: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub mitigated_risks: Option<f64>,
    #[serde(deserialize_with = "lenient_strings")]
    pub high_risk_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRisk {
    pub overall_risk_score: Option<f64>,
    pub total_risks: f64,
    pub high_risks: f64,
    pub medium_risks: f64,
    pub low_risks: f64,
    pub mitigated_risks: f64,
    pub high_risk_areas: Vec<String>,
}

impl RiskMetrics {
    pub fn resolve(&self) -> ResolvedRisk {
        ResolvedRisk {
            overall_risk_score: self.overall_risk_score,
            total_risks: self.total_risks.unwrap_or(0.0),
            high_risks: self.high_risks.unwrap_or(0.0),
            medium_risks: self.medium_risks.unwrap_or(0.0),
            low_risks: self.low_risks.unwrap_or(0.0),
            mitigated_risks: self.mitigated_risks.unwrap_or(0.0),
            high_risk_areas: self.high_risk_areas.clone(),
        }
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Collapse any run of whitespace, line breaks included, to one space
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_number(deserializer)?;
    Ok(value.filter(|n| *n >= 0.0))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(single_line(&s)),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let items = match value {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(single_line(&s)),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect())
}

fn lenient_scores<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let map = match value {
        Some(Value::Object(map)) => map,
        _ => return Ok(HashMap::new()),
    };

    Ok(map
        .iter()
        .filter_map(|(k, v)| number_from_value(v).map(|n| (k.clone(), n)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_bag_resolves_to_defaults() {
        let ReportMetrics::Compliance(m) = ReportMetrics::empty(ReportType::Compliance) else {
            panic!("wrong variant");
        };
        let r = m.resolve();
        assert_eq!(r.overall_score, 0.0);
        assert_eq!(r.component_scores.len(), 5);
        assert!(r.component_scores.iter().all(|(_, s)| s.is_none()));
        assert!(r.recommendations.is_empty());
    }

    #[test]
    fn test_lenient_fields_tolerate_junk() {
        let value = json!({
            "overallScore": "85%",
            "componentScores": {"control_environment": 92, "monitoring": "n/a", "other": 1},
            "recommendations": ["Train staff", null, 3, "  "],
            "assessmentsCompleted": null,
            "lastAssessmentDate": 20260101
        });
        let ReportMetrics::Compliance(m) = ReportMetrics::from_value(ReportType::Compliance, value)
        else {
            panic!("wrong variant");
        };
        assert_eq!(m.overall_score, Some(85.0));
        assert_eq!(m.component_scores.get("control_environment"), Some(&92.0));
        assert!(!m.component_scores.contains_key("monitoring"));
        assert_eq!(m.recommendations, vec!["Train staff", "3"]);
        assert_eq!(m.assessments_completed, None);
        assert_eq!(m.last_assessment_date, None);
    }

    #[test]
    fn test_non_object_bag_is_empty_record() {
        let metrics = ReportMetrics::from_value(ReportType::Risk, json!([1, 2, 3]));
        assert_eq!(metrics, ReportMetrics::Risk(RiskMetrics::default()));
    }

    #[test]
    fn test_negative_counts_and_non_finite_numbers_are_absent() {
        let m: ProgressMetrics =
            serde_json::from_value(json!({"totalWorkflows": -3, "completionRate": "NaN"}))
                .unwrap();
        assert_eq!(m.total_workflows, None);
        assert_eq!(m.completion_rate, None);
        assert_eq!(m.resolve().total_workflows, 0.0);
    }

    #[test]
    fn test_negative_scores_are_kept() {
        let m: ComplianceMetrics = serde_json::from_value(json!({
            "overallScore": -12,
            "componentScores": {"monitoring": "-5"}
        }))
        .unwrap();
        assert_eq!(m.overall_score, Some(-12.0));
        assert_eq!(m.component_scores.get("monitoring"), Some(&-5.0));
    }

    #[test]
    fn test_line_breaks_inside_items_are_flattened() {
        let m: RiskMetrics = serde_json::from_value(json!({
            "highRiskAreas": ["Procurement\nand contracting", "  Payroll\r\n  controls "]
        }))
        .unwrap();
        assert_eq!(
            m.high_risk_areas,
            vec!["Procurement and contracting", "Payroll controls"]
        );

        let m: ComplianceMetrics =
            serde_json::from_value(json!({"lastAssessmentDate": "2026-09-30\n(draft)"}))
                .unwrap();
        assert_eq!(m.last_assessment_date.as_deref(), Some("2026-09-30 (draft)"));
    }

    #[test]
    fn test_tagged_representation() {
        let json = r#"{"reportType":"risk","metrics":{"highRisks":4,"highRiskAreas":["Procurement"]}}"#;
        let metrics: ReportMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.report_type(), ReportType::Risk);
        let ReportMetrics::Risk(r) = metrics else {
            panic!("wrong variant");
        };
        assert_eq!(r.resolve().high_risks, 4.0);
        assert_eq!(r.high_risk_areas, vec!["Procurement"]);
    }
}
